use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::notifications::NotificationKind;
use crate::app::state::*;
use crate::bootstrap::{Continuation, Scheduler, Transition};
use crate::offline::OfflineStatus;
use crate::page::ReadyState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent, scheduler: &dyn Scheduler) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::ReadyStateChange(ready) => {
            handle_ready_state(state, ready, scheduler);
            vec![]
        }
        AppEvent::Continuation(continuation) => {
            handle_continuation(state, continuation, scheduler);
            vec![]
        }
        AppEvent::Offline(status) => {
            match status {
                OfflineStatus::Ready(path) => state.notify(
                    NotificationKind::Success,
                    format!("Offline cache ready at {}", path.display()),
                ),
                OfflineStatus::Failed(err) => state.notify(
                    NotificationKind::Danger,
                    format!("Offline cache unavailable: {}", err),
                ),
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Loader spinner animates on ticks.
            if !state.sequencer.is_finished() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_ready_state(state: &mut AppState, ready: ReadyState, scheduler: &dyn Scheduler) {
    if !state.document.set_ready_state(ready) {
        return;
    }
    let transition = state
        .sequencer
        .on_ready_state_change(&mut state.document, scheduler);
    apply_transition(state, transition);
    state.dirty = true;
}

fn handle_continuation(state: &mut AppState, continuation: Continuation, scheduler: &dyn Scheduler) {
    let transition = state
        .sequencer
        .fire(continuation, &mut state.document, scheduler);
    apply_transition(state, transition);
    state.dirty = true;
}

fn apply_transition(state: &mut AppState, transition: Option<Transition>) {
    match transition {
        Some(Transition::Cleared { loader_removed: true }) => {
            state.notify(NotificationKind::Info, "Dashboard loaded".to_string());
        }
        Some(Transition::Cleared { loader_removed: false }) => {
            state.notify(
                NotificationKind::Warning,
                "Dashboard loaded without a loader element".to_string(),
            );
        }
        Some(Transition::Loaded) | None => {}
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if key.code == KeyCode::F(2) {
        state.notifications.toggle();
        return vec![];
    }

    if key.code == KeyCode::F(5) {
        return vec![Action::Refresh];
    }

    if key.modifiers.contains(KeyModifiers::ALT) && key.code == KeyCode::Left {
        return vec![Action::Back];
    }

    if key.modifiers.contains(KeyModifiers::ALT) && key.code == KeyCode::Right {
        return vec![Action::Forward];
    }

    // Dropdown captures navigation keys while open
    if state.notifications.open {
        match key.code {
            KeyCode::Esc => state.notifications.close(),
            KeyCode::Up => state.notifications.select_prev(),
            KeyCode::Down => state.notifications.select_next(),
            KeyCode::Delete => {
                state.notifications.dismiss_selected();
            }
            _ => {}
        }
        return vec![];
    }

    handle_address_key(state, key)
}

fn handle_address_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let bar = &mut state.address;
    match key.code {
        KeyCode::Enter => {
            let url = bar.submit();
            if !url.is_empty() {
                return vec![Action::Navigate { url }];
            }
        }
        KeyCode::Esc => bar.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => bar.insert_char(c),
        KeyCode::Backspace => bar.delete_back(),
        KeyCode::Delete => bar.delete_forward(),
        KeyCode::Left => bar.move_left(),
        KeyCode::Right => bar.move_right(),
        KeyCode::Home => bar.move_home(),
        KeyCode::End => bar.move_end(),
        KeyCode::Up => bar.history_up(),
        KeyCode::Down => bar.history_down(),
        _ => {}
    }
    vec![]
}
