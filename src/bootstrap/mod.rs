//! Startup sequence of the dashboard.
//!
//! ```text
//! run():
//!     sequencer.start()        → body gets "loading", readiness observed
//!     build_view()             → Environment + Router (relay) or App (direct)
//!     document.mount(#root)
//!     registrar.register()     → fire-and-forget
//!
//! later, on the event loop:
//!     ReadyState::Complete     → "loaded", LoaderCleanup scheduled
//!     LoaderCleanup (+200ms)   → loader removed, markers cleared
//! ```

pub mod continuation;
pub mod sequencer;

pub use continuation::{Continuation, Scheduler, TokioScheduler};
pub use sequencer::{BootstrapSequencer, Transition};

use crate::config::{AppConfig, BootstrapMode};
use crate::offline::OfflineRegistrar;
use crate::page::{Document, View, ViewMount};
use crate::routes::{Component, DefaultRender, MemoryHistory, Resolver, RouteTable, Router};
use crate::store::{Environment, OfflineNetwork, RecordSource, Store};

/// Build the view that gets mounted into the mount node.
pub fn build_view(config: &AppConfig) -> View {
    match config.bootstrap.mode {
        BootstrapMode::Relay => {
            let environment = Environment::new(OfflineNetwork, Store::new(RecordSource::new()));
            let mut router = Router::new(
                RouteTable::dashboard(config.routes.root_component),
                MemoryHistory::new("/"),
                DefaultRender,
            )
            .with_resolver(Resolver::new(environment));
            if let Err(e) = router.replace(&config.routes.initial_path) {
                tracing::warn!(error = %e, "initial path has no route");
            }
            View::Router(Box::new(router))
        }
        BootstrapMode::Direct => View::Component(Component::App),
    }
}

/// Run the startup sequence once. Never fails: a missing mount target is
/// logged and the sequence carries on.
pub fn run(
    sequencer: &mut BootstrapSequencer,
    doc: &mut Document,
    config: &AppConfig,
    registrar: &dyn OfflineRegistrar,
) {
    sequencer.start(doc);

    let view = build_view(config);
    let target = &config.bootstrap.mount_id;
    match doc.mount(view, target) {
        Ok(()) => tracing::info!(mount = %target, mode = ?config.bootstrap.mode, "view mounted"),
        Err(e) => tracing::warn!(error = %e, "mount skipped"),
    }

    registrar.register();
}
