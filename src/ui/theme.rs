use crate::app::notifications::NotificationKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BG_SURFACE: Color = Color::Black;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn brand() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn navbar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn badge(has_items: bool) -> Style {
        if has_items {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Self::navbar()
        }
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn active_route() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    pub fn notification(kind: NotificationKind) -> Style {
        let color = match kind {
            NotificationKind::Danger => Color::Red,
            NotificationKind::Info => Color::Blue,
            NotificationKind::Success => Color::Green,
            NotificationKind::Warning => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn not_found() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
