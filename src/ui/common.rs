//! Common UI components: header bar, status/prompt bar, help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::algo::is_ascending;
use crate::app::App;

/// Render the header bar with array overview and run state.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let sorted = is_ascending(&app.array.values);
    let sorted_span = if sorted {
        Span::styled("sorted", Style::default().fg(app.theme.found))
    } else {
        Span::styled("unsorted", Style::default().add_modifier(Modifier::DIM))
    };

    let state_span = match app.run_label() {
        Some(name) => Span::styled(
            format!("running {}", name),
            Style::default().fg(app.theme.active).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("idle", Style::default().add_modifier(Modifier::DIM)),
    };

    let line = Line::from(vec![
        Span::styled(" ALGOWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.array.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" elements │ "),
        Span::raw(format!("values 1..={} │ ", app.array.settings.max_value)),
        sorted_span,
        Span::raw(" │ "),
        state_span,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar, or the prompt input line when one is open.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(prompt) = &app.prompt {
        let line = Line::from(vec![
            Span::styled(format!(" {}: ", prompt.kind.label()), app.theme.prompt),
            Span::raw(prompt.buffer.as_str()),
            Span::styled("_", app.theme.prompt),
            Span::styled(
                "  (Enter:apply Esc:cancel)",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let controls = if app.busy() {
        "animating..."
    } else {
        "g:generate l:linear s:sort b:binary ?:help q:quit"
    };
    let status = format!(" {} | {}", app.status, controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  g         Generate a new array (size, max value)"),
        Line::from("  l         Linear search for a target"),
        Line::from("  s         Bubble sort the array"),
        Line::from("  b         Binary search (array must be sorted)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Prompts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter     Apply the entered value(s)"),
        Line::from("  Esc       Cancel without running"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from("  Steps pause 120ms (linear), 80ms (sort),"),
        Line::from("  160ms (binary) so you can watch each move."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.active));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 52u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
