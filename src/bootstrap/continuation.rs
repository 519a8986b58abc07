//! Scheduled continuations of the bootstrap sequence.

use std::time::Duration;
use tokio::sync::mpsc;

/// The two deferred steps of the bootstrap sequence. Each fires at most
/// once per sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Readiness reached `Complete`.
    ReadinessComplete,
    /// Loader delay elapsed; remove the loader and clear the markers.
    LoaderCleanup,
}

pub trait Scheduler {
    /// Deliver `continuation` back to the event loop after `delay`.
    fn schedule(&self, delay: Duration, continuation: Continuation);
}

/// Schedules continuations as one-shot tokio timers that post into the
/// event loop's channel.
pub struct TokioScheduler<E> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E> TokioScheduler<E>
where
    E: From<Continuation> + Send + 'static,
{
    pub fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self { tx }
    }
}

impl<E> Scheduler for TokioScheduler<E>
where
    E: From<Continuation> + Send + 'static,
{
    fn schedule(&self, delay: Duration, continuation: Continuation) {
        // Deadline is fixed here, not when the task first gets polled.
        let deadline = tokio::time::Instant::now() + delay;
        let tx = self.tx.clone();
        tracing::debug!(?continuation, delay_ms = delay.as_millis() as u64, "continuation scheduled");
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(continuation.into());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Continuation>();
        let scheduler = TokioScheduler::new(tx);
        let start = tokio::time::Instant::now();

        scheduler.schedule(Duration::from_millis(200), Continuation::LoaderCleanup);

        tokio::time::advance(Duration::from_millis(199)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(Continuation::LoaderCleanup));
        assert!(start.elapsed() >= Duration::from_millis(200));

        drop(scheduler);
        assert_eq!(rx.recv().await, None);
    }
}
