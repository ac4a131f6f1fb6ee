use super::traits::View;
use crate::config::{Config, SelectorMode};
use crate::dataset::Player;
use ratatui::style::Color;

/// Shared state read by every view and the header renderer.
///
/// `selected_season` has exactly one writer (the season selector's key
/// handling) and is read each frame by the roster derivation and the
/// header bar; everything else is fixed at startup.
pub struct SessionState {
    pub players: Vec<Player>,
    pub selected_season: String,
    pub selector_mode: SelectorMode,
    pub selection_fg: Color,
}

impl SessionState {
    pub fn new(players: Vec<Player>, config: &Config) -> Self {
        SessionState {
            players,
            selected_season: config.default_season.clone(),
            selector_mode: config.selector,
            selection_fg: config.theme.selection_fg,
        }
    }
}

/// Application state managing navigation
pub struct AppState {
    pub view_stack: Vec<Box<dyn View>>,
    pub breadcrumb: Vec<String>,
}

impl AppState {
    pub fn new(root_view: Box<dyn View>) -> Self {
        let breadcrumb = vec![root_view.breadcrumb_label()];
        AppState {
            view_stack: vec![root_view],
            breadcrumb,
        }
    }

    /// Get the current active view (top of stack)
    pub fn current_view(&mut self) -> &mut Box<dyn View> {
        self.view_stack
            .last_mut()
            .expect("View stack should never be empty")
    }

    /// Push a new view onto the stack
    pub fn push_view(&mut self, view: Box<dyn View>) {
        self.breadcrumb.push(view.breadcrumb_label());
        self.view_stack.push(view);
    }

    /// Pop the current view from the stack
    /// Returns false if we're already at the root view
    pub fn pop_view(&mut self) -> bool {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
            self.breadcrumb.pop();
            true
        } else {
            false
        }
    }

    /// Check if we're at the root view
    pub fn at_root(&self) -> bool {
        self.view_stack.len() == 1
    }
}
