use crate::config::SelectorMode;
use crate::seasons;
use crate::tui::app::SessionState;
use crate::tui::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// The season selector, polymorphic over its two presentations.
///
/// Both variants list the same season labels and commit the same shared
/// `selected_season` state; only the surface differs. The modal variant
/// opens a centered popup committed with Enter, the inline variant is an
/// always-visible pill row cycled with the arrow keys.
pub struct SeasonPicker {
    mode: SelectorMode,
    open: bool,
    highlighted: usize,
}

impl SeasonPicker {
    pub fn new(mode: SelectorMode) -> Self {
        SeasonPicker {
            mode,
            open: false,
            highlighted: 0,
        }
    }

    /// Whether the modal popup is currently showing (always false inline).
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Display labels for every known season, in order.
    pub fn options() -> Vec<String> {
        seasons::ALL
            .iter()
            .map(|t| seasons::label_or_token(t).to_string())
            .collect()
    }

    /// Height of the selector strip above the roster list.
    pub fn strip_height(&self) -> u16 {
        match self.mode {
            SelectorMode::Modal => 1,
            SelectorMode::Inline => 3,
        }
    }

    fn selected_index(session: &SessionState) -> usize {
        seasons::ALL
            .iter()
            .position(|t| *t == session.selected_season)
            .unwrap_or(0)
    }

    /// The single commit path shared by both variants.
    fn commit(&mut self, index: usize, session: &mut SessionState) {
        if let Some(token) = seasons::ALL.get(index) {
            session.selected_season = token.to_string();
        }
    }

    /// Handle a key event; returns true when the selector consumed it.
    pub fn handle_key(&mut self, key: KeyEvent, session: &mut SessionState) -> bool {
        match self.mode {
            SelectorMode::Modal => self.handle_key_modal(key, session),
            SelectorMode::Inline => self.handle_key_inline(key, session),
        }
    }

    fn handle_key_modal(&mut self, key: KeyEvent, session: &mut SessionState) -> bool {
        if !self.open {
            if key.code == KeyCode::Char('s') {
                self.highlighted = Self::selected_index(session);
                self.open = true;
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Up => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                }
                true
            }
            KeyCode::Down => {
                if self.highlighted + 1 < seasons::ALL.len() {
                    self.highlighted += 1;
                }
                true
            }
            KeyCode::Enter => {
                self.commit(self.highlighted, session);
                self.open = false;
                true
            }
            KeyCode::Esc => {
                self.open = false;
                true
            }
            _ => false,
        }
    }

    fn handle_key_inline(&mut self, key: KeyEvent, session: &mut SessionState) -> bool {
        let current = Self::selected_index(session);
        let count = seasons::ALL.len();
        match key.code {
            KeyCode::Left => {
                self.commit((current + count - 1) % count, session);
                true
            }
            KeyCode::Right => {
                self.commit((current + 1) % count, session);
                true
            }
            _ => false,
        }
    }

    /// Render the selector strip above the roster list.
    pub fn render_strip(&self, f: &mut Frame, area: Rect, session: &SessionState) {
        match self.mode {
            SelectorMode::Modal => self.render_summary(f, area, session),
            SelectorMode::Inline => self.render_pills(f, area, session),
        }
    }

    /// One-line summary for the modal variant, acting as the open button.
    fn render_summary(&self, f: &mut Frame, area: Rect, session: &SessionState) {
        let line = Line::from(vec![
            Span::styled("Season: ", theme::hint_style()),
            Span::styled(
                seasons::label_or_token(&session.selected_season).to_string(),
                theme::list_selected_style(session.selection_fg),
            ),
            Span::styled("  (s to change)", theme::hint_style()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    /// Horizontal pill row for the inline variant.
    fn render_pills(&self, f: &mut Frame, area: Rect, session: &SessionState) {
        let count = seasons::ALL.len() as u16;
        if count == 0 || area.width < count {
            return;
        }
        let gap = 1;
        let pill_width = (area.width - gap * (count - 1)) / count;
        let selected = Self::selected_index(session);

        for (i, token) in seasons::ALL.iter().enumerate() {
            let x = area.x + i as u16 * (pill_width + gap);
            let pill_area = Rect::new(x, area.y, pill_width.min(area.width - (x - area.x)), 3);

            let is_selected = i == selected;
            let (border_style, text_style, border_type) = if is_selected {
                (
                    theme::pill_selected_border(session.selection_fg),
                    theme::pill_selected_text(session.selection_fg),
                    BorderType::Double,
                )
            } else {
                (
                    theme::pill_normal_border(),
                    theme::pill_normal_text(),
                    BorderType::Plain,
                )
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style);

            let paragraph = Paragraph::new(seasons::label_or_token(token))
                .style(text_style)
                .alignment(Alignment::Center)
                .block(block);

            f.render_widget(paragraph, pill_area);
        }
    }

    /// Render the centered popup over the given area (modal variant only).
    pub fn render_modal(&self, f: &mut Frame, area: Rect, session: &SessionState) {
        if !self.open {
            return;
        }

        let options = Self::options();
        let modal_height = options.len() as u16 + 2;
        let max_option_len = options.iter().map(|s| s.width()).max().unwrap_or(20);
        let modal_width = max_option_len as u16 + 8;

        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(modal_width) / 2,
            y: area.y + area.height.saturating_sub(modal_height) / 2,
            width: modal_width.min(area.width),
            height: modal_height.min(area.height),
        };

        let buf = f.buffer_mut();
        Clear.render(modal_area, buf);

        let border_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::card_border_style())
            .title(" Season ");
        let inner = border_block.inner(modal_area);
        border_block.render(modal_area, buf);

        let selected = Self::selected_index(session);
        let mut y = inner.y;
        for (idx, option) in options.iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }

            let style = if idx == selected {
                theme::list_selected_style(session.selection_fg)
            } else {
                theme::list_normal_style()
            };

            if idx == self.highlighted {
                buf.set_string(inner.x, y, format!(" {}", theme::LIST_HIGHLIGHT_SYMBOL), style);
                buf.set_string(inner.x + 3, y, option, style);
            } else {
                buf.set_string(inner.x + 3, y, option, style);
            }

            y += 1;
        }
    }
}
