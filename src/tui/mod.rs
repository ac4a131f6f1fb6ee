mod app;
mod components;
mod theme;
mod traits;
mod views;

#[cfg(test)]
pub mod testing;

use crate::config::Config;
use crate::dataset::Player;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io;
use tracing::debug;

use app::{AppState, SessionState};
use components::{render_breadcrumb, render_header, render_status_bar};
use traits::{KeyResult, View};
use views::roster_list::RosterListView;

const EVENT_POLL_INTERVAL_MS: u64 = 100;

pub fn run(players: Vec<Player>, config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = SessionState::new(players, config);
    let initial_view: Box<dyn View> = Box::new(RosterListView::new(&session));
    let mut app_state = AppState::new(initial_view);

    let result = run_event_loop(&mut terminal, &mut app_state, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
    session: &mut SessionState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // Layout: header bar, breadcrumb, content, status bar
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(2),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(size);

            render_header(f, chunks[0], session);
            render_breadcrumb(f, chunks[1], &app_state.breadcrumb);

            let at_root = app_state.at_root();
            app_state.current_view().render(f, chunks[2], session);

            render_status_bar(f, chunks[3], at_root, session.selector_mode);
        })?;

        if event::poll(std::time::Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                match app_state.current_view().handle_key(key, session) {
                    KeyResult::DrillDown(view) => {
                        debug!("drilling into {}", view.breadcrumb_label());
                        app_state.push_view(view);
                    }
                    KeyResult::GoBack => {
                        // Ignored at the root view
                        app_state.pop_view();
                    }
                    KeyResult::Quit => break,
                    KeyResult::Handled | KeyResult::NotHandled => {}
                }
            }
        }
    }

    Ok(())
}
