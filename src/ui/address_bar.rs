use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = !state.notifications.open;
    let block = Block::default()
        .title(" Go to ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar = &state.address;
    let line = if bar.text.is_empty() && focused {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Theme::ACCENT)),
            Span::styled(state.location_label(), Theme::label()),
        ])
    } else {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Theme::ACCENT)),
            Span::styled(bar.text.as_str(), Theme::input_text()),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let before: String = bar.text.chars().take(bar.cursor).collect();
        let offset = (PROMPT.width() + before.width()) as u16;
        let cursor_x = (inner.x + offset).min(inner.right() - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
