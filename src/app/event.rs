use crate::bootstrap::Continuation;
use crate::offline::OfflineStatus;
use crate::page::ReadyState;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Document readiness advanced
    ReadyStateChange(ReadyState),

    /// A scheduled bootstrap continuation came due
    Continuation(Continuation),

    /// Outcome of offline cache registration
    Offline(OfflineStatus),

    /// Tick for UI refresh
    Tick,
}

impl From<Continuation> for AppEvent {
    fn from(c: Continuation) -> Self {
        AppEvent::Continuation(c)
    }
}

impl From<OfflineStatus> for AppEvent {
    fn from(status: OfflineStatus) -> Self {
        AppEvent::Offline(status)
    }
}
