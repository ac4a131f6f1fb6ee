use super::player_detail::PlayerDetailView;
use super::season_picker::SeasonPicker;
use crate::tui::app::SessionState;
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};
use crate::{formatting, roster};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Root view: the roster for the selected season.
///
/// The list is re-derived from the dataset every frame, so a season
/// change from either selector variant is reflected immediately.
pub struct RosterListView {
    selected_index: usize,
    picker: SeasonPicker,
    rendered_season: String,
}

impl RosterListView {
    pub fn new(session: &SessionState) -> Self {
        RosterListView {
            selected_index: 0,
            picker: SeasonPicker::new(session.selector_mode),
            rendered_season: session.selected_season.clone(),
        }
    }

    fn row_label(player: &crate::dataset::Player) -> String {
        format!(
            "{:<10} {:<22} {:<10} {:<9} {:>3}  {}",
            player.nickname,
            player.name,
            player.country,
            player.position,
            player.age,
            formatting::format_years(&player.years)
        )
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect, session: &SessionState) {
        let roster = roster::for_season(&session.players, &session.selected_season);

        if roster.is_empty() {
            // Matches the original screen: an empty roster shows the
            // loading indicator, not a distinct empty state.
            let loading = Paragraph::new("Loading…")
                .style(theme::hint_style())
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
            return;
        }

        self.selected_index = self.selected_index.min(roster.len() - 1);

        let items: Vec<ListItem> = roster
            .iter()
            .map(|p| ListItem::new(Self::row_label(p)).style(theme::list_normal_style()))
            .collect();

        let list = List::new(items)
            .highlight_style(theme::list_selected_style(session.selection_fg))
            .highlight_symbol(theme::LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        state.select(Some(self.selected_index));

        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_hint(&self, f: &mut Frame, area: Rect) {
        let hint = Paragraph::new("↑↓ Navigate  •  Enter for details")
            .style(theme::hint_style())
            .alignment(Alignment::Center);
        f.render_widget(hint, area);
    }

    fn roster_len(&self, session: &SessionState) -> usize {
        roster::for_season(&session.players, &session.selected_season).len()
    }
}

impl View for RosterListView {
    fn render(&mut self, f: &mut Frame, area: Rect, session: &SessionState) {
        if self.rendered_season != session.selected_season {
            self.rendered_season = session.selected_season.clone();
            self.selected_index = 0;
        }

        let block = Block::default().borders(Borders::ALL).title(" Roster ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.picker.strip_height() + 1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(inner);

        self.picker.render_strip(f, chunks[0], session);
        self.render_list(f, chunks[1], session);
        self.render_hint(f, chunks[2]);

        self.picker.render_modal(f, area, session);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut SessionState) -> KeyResult {
        if self.picker.handle_key(key, session) {
            return KeyResult::Handled;
        }

        match key.code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
                KeyResult::Handled
            }
            KeyCode::Down => {
                let max_index = self.roster_len(session).saturating_sub(1);
                if self.selected_index < max_index {
                    self.selected_index += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Enter => {
                let roster = roster::for_season(&session.players, &session.selected_season);
                match roster.get(self.selected_index) {
                    Some(player) => {
                        KeyResult::DrillDown(Box::new(PlayerDetailView::new((*player).clone())))
                    }
                    None => KeyResult::Handled,
                }
            }
            KeyCode::Esc => KeyResult::GoBack,
            KeyCode::Char('q') => KeyResult::Quit,
            _ => KeyResult::NotHandled,
        }
    }

    fn breadcrumb_label(&self) -> String {
        "Roster".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorMode;
    use crate::tui::testing::{sample_session, terminal_lines};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_drills_into_the_selected_player() {
        let mut session = sample_session("2016.1");
        let mut view = RosterListView::new(&session);

        let result = view.handle_key(key(KeyCode::Enter), &mut session);
        match result {
            KeyResult::DrillDown(child) => {
                // Rank 1 is the in-game leader, first row of the 2016.1 roster
                assert_eq!(child.breadcrumb_label(), "Karde");
            }
            _ => panic!("expected drill-down"),
        }
    }

    #[test]
    fn selection_is_clamped_to_the_roster() {
        let mut session = sample_session("2016.1");
        let mut view = RosterListView::new(&session);
        for _ in 0..50 {
            view.handle_key(key(KeyCode::Down), &mut session);
        }
        let len = view.roster_len(&session);
        assert_eq!(view.selected_index, len - 1);
    }

    #[test]
    fn season_change_resets_the_selection() {
        let mut session = sample_session("2016.1");
        session.selector_mode = SelectorMode::Inline;
        let mut view = RosterListView::new(&session);
        view.handle_key(key(KeyCode::Down), &mut session);
        assert_eq!(view.selected_index, 1);

        view.handle_key(key(KeyCode::Right), &mut session);
        assert_eq!(session.selected_season, "2016.2");
        terminal_lines(100, 24, |f| {
            let area = f.area();
            view.render(f, area, &session);
        });
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn empty_roster_shows_the_loading_indicator() {
        let session = sample_session("2031.9");
        let mut view = RosterListView::new(&session);
        let lines = terminal_lines(60, 16, |f| {
            let area = f.area();
            view.render(f, area, &session);
        });
        assert!(
            lines.iter().any(|l| l.contains("Loading…")),
            "expected loading indicator, got: {:?}",
            lines
        );
    }

    #[test]
    fn enter_on_empty_roster_is_inert() {
        let mut session = sample_session("2031.9");
        let mut view = RosterListView::new(&session);
        assert!(matches!(
            view.handle_key(key(KeyCode::Enter), &mut session),
            KeyResult::Handled
        ));
    }
}
