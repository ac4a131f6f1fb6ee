use crate::dataset::Player;
use crate::tui::app::SessionState;
use crate::tui::components::Scrollable;
use crate::tui::traits::{KeyResult, View};
use crate::{formatting, images};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

/// Detail card for one player, addressed by nickname.
pub struct PlayerDetailView {
    player: Player,
    scrollable: Scrollable,
}

impl PlayerDetailView {
    pub fn new(player: Player) -> Self {
        PlayerDetailView {
            player,
            scrollable: Scrollable::new(),
        }
    }

    fn card_text(&self) -> String {
        let portrait = images::portrait_path(&self.player.img).unwrap_or("(none)");
        format!(
            "Name:     {}\n\
             Country:  {}\n\
             Position: {}\n\
             Age:      {}\n\
             Seasons:  {}\n\
             Portrait: {}",
            self.player.name,
            self.player.country,
            self.player.position,
            self.player.age,
            formatting::format_years(&self.player.years),
            portrait,
        )
    }
}

impl View for PlayerDetailView {
    fn render(&mut self, f: &mut Frame, area: Rect, _session: &SessionState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.player.nickname));

        self.scrollable.render_paragraph(f, area, self.card_text(), Some(block));
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionState) -> KeyResult {
        match key.code {
            KeyCode::Esc => KeyResult::GoBack,
            KeyCode::Char('q') => KeyResult::Quit,
            _ => {
                if self.scrollable.handle_key(key) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
        }
    }

    fn breadcrumb_label(&self) -> String {
        self.player.nickname.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{sample_session, terminal_lines};
    use crate::{dataset, roster};

    #[test]
    fn card_shows_identity_and_formatted_seasons() {
        let players = dataset::load().unwrap();
        let player = dataset::find_by_nickname(&players, "veho").unwrap().clone();
        let mut view = PlayerDetailView::new(player);

        let session = sample_session("2016.1");
        let lines = terminal_lines(60, 12, |f| {
            let area = f.area();
            view.render(f, area, &session);
        });
        let joined = lines.join("\n");
        assert!(joined.contains("veho"));
        assert!(joined.contains("Veeti Honkanen"));
        assert!(joined.contains("2016 Spring, 2016 Summer, 2016 Autumn"));
    }

    #[test]
    fn breadcrumb_is_the_nickname() {
        let players = dataset::load().unwrap();
        let first = roster::for_season(&players, "2016.1")[0].clone();
        let view = PlayerDetailView::new(first);
        assert_eq!(view.breadcrumb_label(), "Karde");
    }
}
