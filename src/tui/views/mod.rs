pub mod player_detail;
pub mod roster_list;
pub mod season_picker;
