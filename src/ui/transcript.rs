//! Run transcript panel.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the tail of the transcript, newest line at the bottom.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.transcript.len().saturating_sub(visible);
    let lines: Vec<Line> =
        app.transcript[start..].iter().map(|note| Line::from(note.as_str())).collect();

    let block = Block::default()
        .title(" Transcript ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
