use ratatui::style::{Color, Modifier, Style};

pub const MUTED_COLOR: Color = Color::DarkGray;

pub const LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";

pub fn header_title_style() -> Style {
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn list_normal_style() -> Style {
    Style::new().fg(Color::White)
}

pub fn list_selected_style(selection_fg: Color) -> Style {
    Style::new().fg(selection_fg).add_modifier(Modifier::BOLD)
}

// Horizontal pills pattern (inline season selector)
pub fn pill_normal_border() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn pill_selected_border(selection_fg: Color) -> Style {
    Style::new().fg(selection_fg).add_modifier(Modifier::BOLD)
}

pub fn pill_normal_text() -> Style {
    Style::new().fg(Color::White)
}

pub fn pill_selected_text(selection_fg: Color) -> Style {
    Style::new().fg(selection_fg).add_modifier(Modifier::BOLD)
}

// Cards and blocks
pub fn card_border_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn hint_style() -> Style {
    Style::new().fg(MUTED_COLOR).add_modifier(Modifier::DIM)
}
