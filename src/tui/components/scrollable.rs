use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph},
    Frame,
};

/// A wrapper that makes paragraph content scrollable
pub struct Scrollable {
    scroll_offset: u16,
    content_height: usize,
    viewport_height: u16,
}

impl Scrollable {
    pub fn new() -> Self {
        Scrollable {
            scroll_offset: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Handle scroll keys (Up, Down, PageUp, PageDown, Home, End)
    /// Returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll_down(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(10);
                true
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                true
            }
            KeyCode::End => {
                self.scroll_offset = self.max_scroll();
                true
            }
            _ => false,
        }
    }

    /// Scroll down by n lines, but don't scroll past the bottom
    fn scroll_down(&mut self, n: u16) {
        self.scroll_offset = (self.scroll_offset + n).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        (self.content_height as u16).saturating_sub(self.viewport_height)
    }

    /// Render scrollable content using a Paragraph widget
    pub fn render_paragraph(
        &mut self,
        f: &mut Frame,
        area: Rect,
        content: String,
        block: Option<Block>,
    ) {
        self.content_height = content.lines().count();
        self.viewport_height = match &block {
            Some(_) => area.height.saturating_sub(2),
            None => area.height,
        };
        // Clamp in case the viewport grew since the last scroll
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        let mut paragraph = Paragraph::new(content).scroll((self.scroll_offset, 0));
        if let Some(block) = block {
            paragraph = paragraph.block(block);
        }

        f.render_widget(paragraph, area);
    }
}

impl Default for Scrollable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scrollable_with(content: usize, viewport: u16) -> Scrollable {
        let mut s = Scrollable::new();
        s.content_height = content;
        s.viewport_height = viewport;
        s
    }

    #[test]
    fn scrolling_stops_at_bottom() {
        let mut s = scrollable_with(20, 10);
        s.handle_key(key(KeyCode::End));
        assert_eq!(s.scroll_offset, 10);
        assert!(!s.handle_key(key(KeyCode::Char('x'))));
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.scroll_offset, 10);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut s = scrollable_with(5, 10);
        s.handle_key(key(KeyCode::PageDown));
        assert_eq!(s.scroll_offset, 0);
    }

    #[test]
    fn home_returns_to_top() {
        let mut s = scrollable_with(40, 10);
        s.handle_key(key(KeyCode::PageDown));
        assert!(s.scroll_offset > 0);
        s.handle_key(key(KeyCode::Home));
        assert_eq!(s.scroll_offset, 0);
    }
}
