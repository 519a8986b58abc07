//! Loading → loaded → cleared transition of the host page.

use super::continuation::{Continuation, Scheduler};
use crate::config::BootstrapConfig;
use crate::page::{transition, Document, LoadSignal, LoadState, ReadyState};
use std::time::Duration;

/// Visible outcome of a fired continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Loaded,
    Cleared { loader_removed: bool },
}

#[derive(Debug)]
pub struct BootstrapSequencer {
    loader_id: String,
    loader_delay: Duration,
    state: Option<LoadState>,
    started: bool,
    observing: bool,
    readiness_fired: bool,
    cleanup_fired: bool,
}

impl BootstrapSequencer {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            loader_id: config.loader_id.clone(),
            loader_delay: Duration::from_millis(config.loader_delay_ms),
            state: None,
            started: false,
            observing: false,
            readiness_fired: false,
            cleanup_fired: false,
        }
    }

    pub fn load_state(&self) -> Option<LoadState> {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the loader has been torn down.
    pub fn is_finished(&self) -> bool {
        self.cleanup_fired
    }

    /// Mark the page loading and start observing readiness. A second call
    /// is a no-op.
    pub fn start(&mut self, doc: &mut Document) {
        if self.started {
            tracing::debug!("bootstrap already started");
            return;
        }
        self.started = true;
        self.advance(doc, LoadSignal::Start);
        self.observing = true;
        tracing::info!(ready_state = doc.ready_state().as_str(), "bootstrap started");
    }

    /// Readiness observer. Fires [`Continuation::ReadinessComplete`] when
    /// the document reports `Complete`.
    pub fn on_ready_state_change(
        &mut self,
        doc: &mut Document,
        scheduler: &dyn Scheduler,
    ) -> Option<Transition> {
        if !self.observing {
            return None;
        }
        tracing::debug!(ready_state = doc.ready_state().as_str(), "ready state changed");
        if doc.ready_state() != ReadyState::Complete {
            return None;
        }
        self.fire(Continuation::ReadinessComplete, doc, scheduler)
    }

    /// Run a continuation. Duplicate or out-of-order deliveries are
    /// ignored and return `None`.
    pub fn fire(
        &mut self,
        continuation: Continuation,
        doc: &mut Document,
        scheduler: &dyn Scheduler,
    ) -> Option<Transition> {
        match continuation {
            Continuation::ReadinessComplete => {
                if !self.observing {
                    tracing::debug!("readiness continuation before start ignored");
                    return None;
                }
                if self.readiness_fired {
                    tracing::debug!("readiness continuation already fired");
                    return None;
                }
                self.readiness_fired = true;
                self.advance(doc, LoadSignal::Ready);
                scheduler.schedule(self.loader_delay, Continuation::LoaderCleanup);
                Some(Transition::Loaded)
            }
            Continuation::LoaderCleanup => {
                if !self.readiness_fired || self.cleanup_fired {
                    tracing::debug!(
                        readiness_fired = self.readiness_fired,
                        "cleanup continuation ignored"
                    );
                    return None;
                }
                self.cleanup_fired = true;
                let loader_removed = doc.remove_element(&self.loader_id);
                if !loader_removed {
                    tracing::debug!(loader = %self.loader_id, "loader element absent; removal skipped");
                }
                self.advance(doc, LoadSignal::Cleanup);
                tracing::info!(loader_removed, "bootstrap finished");
                Some(Transition::Cleared { loader_removed })
            }
        }
    }

    fn advance(&mut self, doc: &mut Document, signal: LoadSignal) {
        self.state = transition(self.state, signal);
        match doc.body_mut() {
            Some(body) => LoadState::apply(self.state, &mut body.classes),
            None => tracing::debug!(?signal, "no body element; class update skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BODY_LOADED, BODY_LOADING};
    use std::cell::RefCell;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct RecordingScheduler {
        scheduled: RefCell<Vec<(Duration, Continuation)>>,
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, delay: Duration, continuation: Continuation) {
            self.scheduled.borrow_mut().push((delay, continuation));
        }
    }

    fn setup() -> (BootstrapSequencer, Document) {
        let config = BootstrapConfig::default();
        let doc = Document::new(&config.loader_id, &config.mount_id);
        (BootstrapSequencer::new(&config), doc)
    }

    fn complete(seq: &mut BootstrapSequencer, doc: &mut Document, sched: &dyn Scheduler) -> Option<Transition> {
        doc.set_ready_state(ReadyState::Complete);
        seq.on_ready_state_change(doc, sched)
    }

    #[test]
    fn test_start_marks_loading() {
        let (mut seq, mut doc) = setup();
        seq.start(&mut doc);
        assert!(doc.body_has_class(BODY_LOADING));
        assert!(!doc.body_has_class(BODY_LOADED));
        assert_eq!(seq.load_state(), Some(LoadState::Loading));
    }

    #[test]
    fn test_interactive_is_ignored() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);
        doc.set_ready_state(ReadyState::Interactive);
        assert_eq!(seq.on_ready_state_change(&mut doc, &sched), None);
        assert!(sched.scheduled.borrow().is_empty());
    }

    #[test]
    fn test_complete_marks_loaded_and_schedules_cleanup() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);

        assert_eq!(complete(&mut seq, &mut doc, &sched), Some(Transition::Loaded));
        assert!(doc.body_has_class(BODY_LOADING));
        assert!(doc.body_has_class(BODY_LOADED));
        assert_eq!(
            *sched.scheduled.borrow(),
            vec![(Duration::from_millis(200), Continuation::LoaderCleanup)]
        );
        assert!(doc.element("initial-loader").is_some());
    }

    #[test]
    fn test_cleanup_removes_loader_and_clears_classes() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);
        complete(&mut seq, &mut doc, &sched);

        let t = seq.fire(Continuation::LoaderCleanup, &mut doc, &sched);
        assert_eq!(t, Some(Transition::Cleared { loader_removed: true }));
        assert!(doc.element("initial-loader").is_none());
        assert!(!doc.body_has_class(BODY_LOADING));
        assert!(!doc.body_has_class(BODY_LOADED));
        assert!(doc.element("root").is_some());
        assert!(seq.is_finished());
    }

    #[test]
    fn test_missing_loader_still_clears_classes() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);
        complete(&mut seq, &mut doc, &sched);
        doc.remove_element("initial-loader");

        let t = seq.fire(Continuation::LoaderCleanup, &mut doc, &sched);
        assert_eq!(t, Some(Transition::Cleared { loader_removed: false }));
        assert!(!doc.body_has_class(BODY_LOADING));
        assert!(!doc.body_has_class(BODY_LOADED));
    }

    #[test]
    fn test_missing_body_is_tolerated() {
        let config = BootstrapConfig::default();
        let mut seq = BootstrapSequencer::new(&config);
        let mut doc = Document::empty();
        let sched = RecordingScheduler::default();

        seq.start(&mut doc);
        assert_eq!(complete(&mut seq, &mut doc, &sched), Some(Transition::Loaded));
        assert_eq!(
            seq.fire(Continuation::LoaderCleanup, &mut doc, &sched),
            Some(Transition::Cleared { loader_removed: false })
        );
        assert_eq!(seq.load_state(), None);
    }

    #[test]
    fn test_start_twice_is_idempotent() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);
        seq.start(&mut doc);
        assert!(doc.body_has_class(BODY_LOADING));

        complete(&mut seq, &mut doc, &sched);
        assert_eq!(sched.scheduled.borrow().len(), 1);
    }

    #[test]
    fn test_continuations_fire_once() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        seq.start(&mut doc);

        // Cleanup before readiness is ignored.
        assert_eq!(seq.fire(Continuation::LoaderCleanup, &mut doc, &sched), None);
        assert!(doc.element("initial-loader").is_some());

        complete(&mut seq, &mut doc, &sched);
        assert_eq!(
            seq.fire(Continuation::ReadinessComplete, &mut doc, &sched),
            None
        );
        assert!(seq.fire(Continuation::LoaderCleanup, &mut doc, &sched).is_some());
        assert_eq!(seq.fire(Continuation::LoaderCleanup, &mut doc, &sched), None);
        assert_eq!(sched.scheduled.borrow().len(), 1);
    }

    #[test]
    fn test_not_observing_before_start() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();
        assert_eq!(complete(&mut seq, &mut doc, &sched), None);
        assert!(!doc.body_has_class(BODY_LOADED));
    }

    #[test]
    fn test_readiness_delivered_before_start_is_ignored() {
        let (mut seq, mut doc) = setup();
        let sched = RecordingScheduler::default();

        assert_eq!(seq.fire(Continuation::ReadinessComplete, &mut doc, &sched), None);
        assert!(!doc.body_has_class(BODY_LOADED));
        assert!(sched.scheduled.borrow().is_empty());
        assert_eq!(seq.load_state(), None);

        // The guard does not consume the single firing.
        seq.start(&mut doc);
        assert_eq!(complete(&mut seq, &mut doc, &sched), Some(Transition::Loaded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_runs_200ms_after_readiness() {
        let (mut seq, mut doc) = setup();
        let (tx, mut rx) = mpsc::unbounded_channel::<Continuation>();
        let sched = crate::bootstrap::TokioScheduler::new(tx);

        seq.start(&mut doc);
        let ready_at = tokio::time::Instant::now();
        complete(&mut seq, &mut doc, &sched);

        tokio::time::advance(Duration::from_millis(199)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(doc.element("initial-loader").is_some());
        assert!(doc.body_has_class(BODY_LOADED));

        let continuation = rx.recv().await.unwrap();
        assert!(ready_at.elapsed() >= Duration::from_millis(200));
        seq.fire(continuation, &mut doc, &sched);

        assert!(doc.element("initial-loader").is_none());
        assert!(!doc.body_has_class(BODY_LOADING));
        assert!(!doc.body_has_class(BODY_LOADED));
    }
}
