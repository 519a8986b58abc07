//! Initial loader shown while `#initial-loader` is in the document.

use crate::app::state::AppState;
use crate::page::BODY_LOADED;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = centered(frame.area(), 36, 5);
    frame.render_widget(Clear, area);

    let label = if state.document.body_has_class(BODY_LOADED) {
        "Loaded"
    } else {
        "Loading…"
    };
    let spinner = SPINNER[(state.tick_count as usize) % SPINNER.len()];

    let block = Block::default()
        .title(" Vertex ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(Theme::ACCENT)),
            Span::styled(label, Theme::value()),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
