use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use url::Url;

use crate::app::ViewMode;
use crate::format::truncate_unicode;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: ViewMode,
    server: &Url,
    frames: u64,
    core_count: Option<usize>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            " corebars ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(mode.label(), Style::default().fg(theme.text_secondary)),
        Span::raw("  "),
        Span::styled(
            truncate_unicode(server.as_str(), 40),
            Style::default().fg(theme.text_secondary),
        ),
    ];

    if let Some(n) = core_count {
        spans.extend([
            Span::raw("  "),
            Span::styled(
                format!("Cores: {n}"),
                Style::default().fg(theme.text_secondary),
            ),
        ]);
    }
    spans.extend([
        Span::raw("  "),
        Span::styled(
            format!("Frames: {frames}"),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
