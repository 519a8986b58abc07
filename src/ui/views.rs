//! Content pane: whatever is mounted at the mount node.

use crate::app::state::AppState;
use crate::page::View;
use crate::routes::{Component, Rendered, Router};
use crate::store::Store;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};
use serde_json::Value;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.mounted() {
        None => render_unmounted(frame, area, state),
        Some(View::Component(component)) => render_component(frame, area, state, *component, None),
        Some(View::Router(router)) => match router.render() {
            Rendered::Route { component, .. } => {
                render_component(frame, area, state, component, Some(&**router))
            }
            Rendered::NotFound { location } => render_not_found(frame, area, &location.href()),
        },
    }
}

fn pane(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
}

fn render_unmounted(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = Line::from(vec![
        Span::styled(" Nothing mounted at ", Theme::label()),
        Span::styled(format!("#{}", state.config.bootstrap.mount_id), Theme::not_found()),
    ]);
    frame.render_widget(Paragraph::new(text).block(pane(" Dashboard ")), area);
}

fn render_not_found(frame: &mut Frame, area: Rect, href: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("404", Theme::not_found())),
        Line::from(Span::styled(format!("No page at {}", href), Theme::value())),
        Line::from(""),
        Line::from(Span::styled("Alt+← to go back", Theme::label())),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(pane(" Not Found "));
    frame.render_widget(paragraph, area);
}

fn render_component(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    component: Component,
    router: Option<&Router>,
) {
    match component {
        Component::DefaultLayout => render_overview(frame, area, state, router),
        Component::App => render_app(frame, area, state),
    }
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Theme::label()),
        Span::styled(value, Theme::value()),
    ])
}

fn render_app(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = vec![
        Line::from(Span::styled("Vertex Admin", Theme::active_route())),
        Line::from(""),
        field("Mode", "direct".to_string()),
        field("Ready", state.document.ready_state().as_str().to_string()),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(pane(" App "));
    frame.render_widget(paragraph, area);
}

/// Linked records show their id and typename; scalars print as JSON.
fn describe_field(store: &Store, value: &Value) -> String {
    match value.get("__ref").and_then(Value::as_str) {
        Some(id) => match store.lookup(id).and_then(|r| r.typename.as_deref()) {
            Some(typename) => format!("→ {} ({})", id, typename),
            None => format!("→ {}", id),
        },
        None => value.to_string(),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState, router: Option<&Router>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let load_state = match state.sequencer.load_state() {
        Some(s) => format!("{:?}", s).to_lowercase(),
        None => "idle".to_string(),
    };
    let classes = state.body_classes();
    let mut overview = vec![
        field("Ready", state.document.ready_state().as_str().to_string()),
        field("Load", load_state),
        field(
            "Body",
            if classes.is_empty() { "—".to_string() } else { classes },
        ),
        field("Mode", format!("{:?}", state.config.bootstrap.mode).to_lowercase()),
    ];
    if let Some(env) = router.and_then(|r| r.resolver()).map(|r| r.environment()) {
        let store = env.store();
        overview.push(Line::from(""));
        overview.push(field("Records", store.record_count().to_string()));
        overview.push(field("Publishes", store.publish_count().to_string()));
        if let Some(root) = store.root() {
            overview.push(Line::from(""));
            for (name, value) in &root.fields {
                overview.push(field(name, describe_field(store, value)));
            }
        }
    }
    frame.render_widget(
        Paragraph::new(overview).block(pane(" Overview ")),
        chunks[0],
    );

    let Some(router) = router else {
        frame.render_widget(pane(" Routes "), chunks[1]);
        return;
    };
    let active = router.current_match().map(|m| m.pattern);
    let rows: Vec<Row> = router
        .table()
        .routes()
        .iter()
        .map(|decl| {
            let style = if active.as_deref() == Some(decl.pattern.as_str()) {
                Theme::active_route()
            } else {
                Theme::value()
            };
            Row::new(vec![decl.pattern.as_str().to_string(), decl.component.name().to_string()])
                .style(style)
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
        .header(Row::new(vec!["Path", "Component"]).style(Theme::label()))
        .block(pane(" Routes "));
    frame.render_widget(table, chunks[1]);
}
