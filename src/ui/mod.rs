//! Terminal rendering using ratatui.
//!
//! Pure projection from application state to a frame: nothing in here
//! mutates the array or the run.

pub mod bars;
pub mod common;
pub mod theme;
pub mod transcript;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Top-level frame layout: header, bars, transcript, status.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered =
            ratatui::layout::Rect::new(0, area.height.saturating_sub(5) / 2, area.width, 5);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(10),   // Array bars
        Constraint::Length(8), // Transcript
        Constraint::Length(1), // Status / prompt bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    bars::render(frame, app, chunks[1]);
    transcript::render(frame, app, chunks[2]);
    common::render_status_bar(frame, app, chunks[3]);

    // Render help overlay if active
    if app.show_help {
        common::render_help(frame, app, area);
    }
}
