//! Array bar panel.
//!
//! Projects the array and the current marker into a bar chart: one bar
//! per element, styled by what the in-flight algorithm is doing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::app::App;

/// Render the array as one bar per element.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let values = &app.array.values;
    if values.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    // Fit n bars plus gaps into the inner width, at least one cell each.
    let inner_width = area.width.saturating_sub(2);
    let n = values.len() as u16;
    let bar_gap = 1u16;
    let bar_width = ((inner_width + bar_gap) / n).saturating_sub(bar_gap).max(1);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let style = app.theme.bar_style(i, &app.marker);
            let mut bar = Bar::default()
                .value(u64::from(value))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED));
            // Value labels only when they have room to be legible
            if bar_width < 3 {
                bar = bar.text_value(String::new());
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap);

    frame.render_widget(chart, area);
}
