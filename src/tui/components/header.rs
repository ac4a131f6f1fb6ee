use crate::seasons;
use crate::tui::app::SessionState;
use crate::tui::theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const APP_TITLE: &str = "Aurora Roster History";

/// Render the top header bar.
///
/// The right side always shows "<season label> Roster" for the currently
/// selected season, recomputed from shared state every frame before paint.
pub fn render_header(f: &mut Frame, area: Rect, session: &SessionState) {
    let title = seasons::header_title(&session.selected_season);

    let mut spans = vec![Span::styled(APP_TITLE, theme::hint_style())];

    let padding = (area.width as usize).saturating_sub(APP_TITLE.len() + title.len() + 1);
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(title, theme::header_title_style()));

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(paragraph, area);
}
