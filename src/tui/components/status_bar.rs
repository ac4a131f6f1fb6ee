use crate::config::SelectorMode;
use crate::tui::theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom status bar with contextual key hints
pub fn render_status_bar(f: &mut Frame, area: Rect, at_root: bool, selector_mode: SelectorMode) {
    let help_style = theme::hint_style();

    let hints: &[&str] = if at_root {
        match selector_mode {
            SelectorMode::Modal => &["↑/↓ Navigate", "Enter Details", "s Season", "q Quit"],
            SelectorMode::Inline => &["↑/↓ Navigate", "←/→ Season", "Enter Details", "q Quit"],
        }
    } else {
        &["↑/↓ Scroll", "Esc Back", "q Quit"]
    };

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", help_style));
        }
        spans.push(Span::styled(*hint, help_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
