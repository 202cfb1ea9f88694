use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::format::format_percent;
use crate::ui::theme::Theme;

/// One row per core: fixed-width index label, then a proportional gauge
/// labeled with the raw value to two decimals. The label is never clamped;
/// the fill ratio is, since a gauge cannot overdraw its row.
pub fn render(frame: &mut Frame, area: Rect, sample: &[f64], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); sample.len()])
        .split(area);

    for (i, (&value, row)) in sample.iter().zip(rows.iter()).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(9), Constraint::Min(10)])
            .split(*row);

        let label = Paragraph::new(Line::from(Span::styled(
            format!("core {i:>2}"),
            Style::default().fg(theme.text_secondary),
        )));
        frame.render_widget(label, cols[0]);

        let gauge = Gauge::default()
            .ratio((value / 100.0).clamp(0.0, 1.0))
            .label(format_percent(value))
            .gauge_style(
                Style::default()
                    .fg(theme.bar_color(value))
                    .bg(theme.gauge_unfilled),
            );
        frame.render_widget(gauge, cols[1]);
    }
}
