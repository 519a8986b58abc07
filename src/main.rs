mod app;
mod bootstrap;
mod config;
mod logging;
mod offline;
mod page;
mod routes;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::bootstrap::TokioScheduler;
use crate::offline::{CacheRegistrar, NoopRegistrar, OfflineRegistrar};
use crate::page::ReadyState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    // Logging goes to a file; the terminal is about to be taken over
    match logging::init(&cfg.logging) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "logging initialised"),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    // First run: write the defaults so they can be edited
    if !config::config_path().exists() {
        if let Err(e) = config::save_config(&cfg) {
            tracing::warn!(error = %e, "could not write default config");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "dashboard exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let scheduler = TokioScheduler::new(event_tx.clone());
    let registrar: Box<dyn OfflineRegistrar> = if cfg.offline.enabled {
        let dir = cfg
            .offline
            .cache_dir
            .clone()
            .unwrap_or_else(offline::default_cache_dir);
        Box::new(CacheRegistrar::new(dir, event_tx.clone()))
    } else {
        Box::new(NoopRegistrar)
    };

    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    state.bootstrap(registrar.as_ref());

    // Initial render, with the loader up
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // The first frame is on screen: the document is interactive, then complete
    let _ = event_tx.send(AppEvent::ReadyStateChange(ReadyState::Interactive));
    let _ = event_tx.send(AppEvent::ReadyStateChange(ReadyState::Complete));

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event, &scheduler);

        // Process actions
        for action in actions {
            match action {
                Action::Navigate { url } => state.navigate(&url),
                Action::Back => state.back(),
                Action::Forward => state.forward(),
                Action::Refresh => state.refresh(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
