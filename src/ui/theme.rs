//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::algo::Marker;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for plain bars.
    pub bar: Color,
    /// Color for the index currently being examined.
    pub active: Color,
    /// Color for the index where the target was found.
    pub found: Color,
    /// Color for bars outside the binary search window.
    pub dimmed: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the header line.
    pub header: Style,
    /// Style for the prompt input line.
    pub prompt: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            bar: Color::Cyan,
            active: Color::Yellow,
            found: Color::Green,
            dimmed: Color::DarkGray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            bar: Color::Blue,
            active: Color::Magenta,
            found: Color::Green,
            dimmed: Color::Gray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for the bar at `index` under the given marker.
    ///
    /// Found beats active so the final found step reads green.
    pub fn bar_style(&self, index: usize, marker: &Marker) -> Style {
        if marker.found == Some(index) {
            Style::default().fg(self.found).add_modifier(Modifier::BOLD)
        } else if marker.active == Some(index) {
            Style::default().fg(self.active).add_modifier(Modifier::BOLD)
        } else if marker.outside_window(index) {
            Style::default().fg(self.dimmed).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(self.bar)
        }
    }
}
