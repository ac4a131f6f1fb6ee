//! Test helpers for TUI rendering and state.

use super::app::SessionState;
use crate::config::Config;
use crate::dataset;
use ratatui::{backend::TestBackend, Frame, Terminal};

/// Build a session over the bundled dataset with the given season selected.
pub fn sample_session(season: &str) -> SessionState {
    let players = dataset::load().expect("bundled dataset must parse");
    let mut session = SessionState::new(players, &Config::default());
    session.selected_season = season.to_string();
    session
}

/// Draw one frame into a test backend and return its rows as strings.
pub fn terminal_lines<F>(width: u16, height: u16, draw: F) -> Vec<String>
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(draw).expect("draw frame");

    let buf = terminal.backend().buffer();
    let area = *buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
