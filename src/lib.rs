pub mod commands;
pub mod config;
pub mod dataset;
pub mod formatting;
pub mod images;
pub mod positions;
pub mod roster;
pub mod seasons;
pub mod tui;
