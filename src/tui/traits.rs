use super::app::SessionState;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Result of key handling by a view
pub enum KeyResult {
    /// The view consumed the key event
    Handled,
    /// The view didn't handle this key, pass to parent
    NotHandled,
    /// Request to drill down into a child view
    DrillDown(Box<dyn View>),
    /// Request to go back up one level
    GoBack,
    /// Request to quit the application
    Quit,
}

/// Core trait for all views in the hierarchical TUI
pub trait View {
    /// Render the view into the content area
    fn render(&mut self, f: &mut Frame, area: Rect, session: &SessionState);

    /// Handle a key event; the session carries the shared selected-season
    /// state, which selector views mutate on commit
    fn handle_key(&mut self, key: KeyEvent, session: &mut SessionState) -> KeyResult;

    /// Get the breadcrumb label for this view
    fn breadcrumb_label(&self) -> String;
}
