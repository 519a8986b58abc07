use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = " F2 notifications · F5 refresh · Alt+←/→ history · Ctrl+C quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    // Pad to fill remaining space
    let remaining = (area.width as usize).saturating_sub(status.width() + HINTS.width());

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(HINTS, Style::default().fg(Theme::ACCENT).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
