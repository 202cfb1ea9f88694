use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

/// Verbatim pretty-printed JSON text, already indented by the fetch side.
pub fn render(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let paragraph = Paragraph::new(text).style(Style::default().fg(theme.text_primary));
    frame.render_widget(paragraph, area);
}
