//! Offline support registration.
//!
//! Registration is fire-and-forget: the bootstrap sequence calls
//! [`OfflineRegistrar::register`] once and never looks at an outcome. The
//! cache registrar reports back over its own channel so the UI can show a
//! notification.

use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfflineStatus {
    Ready(PathBuf),
    Failed(String),
}

pub trait OfflineRegistrar {
    fn register(&self);
}

/// Used when offline support is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrar;

impl OfflineRegistrar for NoopRegistrar {
    fn register(&self) {
        tracing::debug!("offline support disabled");
    }
}

/// Prepares an on-disk cache directory on a background task.
pub struct CacheRegistrar<E> {
    cache_dir: PathBuf,
    tx: mpsc::UnboundedSender<E>,
}

impl<E> CacheRegistrar<E>
where
    E: From<OfflineStatus> + Send + 'static,
{
    pub fn new(cache_dir: PathBuf, tx: mpsc::UnboundedSender<E>) -> Self {
        Self { cache_dir, tx }
    }
}

impl<E> OfflineRegistrar for CacheRegistrar<E>
where
    E: From<OfflineStatus> + Send + 'static,
{
    fn register(&self) {
        let dir = self.cache_dir.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let status = match tokio::fs::create_dir_all(&dir).await {
                Ok(()) => {
                    tracing::info!(path = %dir.display(), "offline cache registered");
                    OfflineStatus::Ready(dir)
                }
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "offline cache registration failed");
                    OfflineStatus::Failed(e.to_string())
                }
            };
            let _ = tx.send(status.into());
        });
    }
}

/// Default cache location.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vertex-ui")
}
