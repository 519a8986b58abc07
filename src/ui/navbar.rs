//! Top navbar and the notifications dropdown anchored to it.

use crate::app::state::AppState;
use crate::ui::layout::dropdown_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = state.notifications.len();
    let brand = " Vertex Admin ";
    let badge = format!(" Notifications {} ", count);
    let caret = if state.notifications.open { "▴ " } else { "▾ " };

    let used = brand.width() + badge.width() + caret.width();
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(brand, Theme::brand()),
        Span::styled(" ".repeat(padding), Theme::navbar()),
        Span::styled(badge, Theme::badge(count > 0)),
        Span::styled(caret, Theme::badge(count > 0)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_dropdown(frame: &mut Frame, state: &AppState) {
    let dropdown = &state.notifications;
    if !dropdown.open {
        return;
    }

    let area = dropdown_area(frame.area(), dropdown.len());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Notifications · Del dismiss · Esc close ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));

    if dropdown.is_empty() {
        let empty = Paragraph::new(Span::styled(" No notifications", Theme::label())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = dropdown
        .items()
        .iter()
        .map(|n| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", n.kind.icon()), Theme::notification(n.kind)),
                    Span::styled(n.title.clone(), Theme::value()),
                ]),
                Line::from(Span::styled(format!("   {}", n.date), Theme::label())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected());
    let mut list_state = ListState::default().with_selected(Some(dropdown.selected()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
