mod address_bar;
mod layout;
mod loader;
mod navbar;
mod status_bar;
mod theme;
mod views;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    if state.loader_visible() {
        loader::render(frame, state);
        return;
    }

    let dashboard = layout::compute_layout(frame.area());
    navbar::render(frame, dashboard.navbar, state);
    address_bar::render(frame, dashboard.address_bar, state);
    views::render(frame, dashboard.content, state);
    status_bar::render(frame, dashboard.status_bar, state);

    // Overlay last so it sits above the content pane.
    navbar::render_dropdown(frame, state);
}
