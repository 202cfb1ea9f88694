pub mod bars;
pub mod header;
pub mod json_view;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::app::{App, ViewContent};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let core_count = match &app.view {
        ViewContent::Bars(sample) => Some(sample.len()),
        _ => None,
    };
    header::render(
        frame,
        chunks[0],
        app.mode,
        &app.server,
        app.frames,
        core_count,
        &app.theme,
    );

    let content = chunks[1];
    match &app.view {
        ViewContent::Waiting => {
            let placeholder = Paragraph::new("waiting for data\u{2026}")
                .style(Style::default().fg(app.theme.text_secondary));
            frame.render_widget(placeholder, content);
        }
        ViewContent::Raw(text) => json_view::render(frame, content, text, &app.theme),
        ViewContent::Bars(sample) => bars::render(frame, content, sample, &app.theme),
        ViewContent::Error => {
            // Fixed placeholder: the content view is exactly this text.
            let placeholder =
                Paragraph::new("error").style(Style::default().fg(app.theme.status_err));
            frame.render_widget(placeholder, content);
        }
    }

    statusbar::render(frame, chunks[2], &app.keybinds, app.link_down, &app.theme);
}
