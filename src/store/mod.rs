//! Data-store environment: a fetch strategy over a normalized record store.

pub mod environment;
pub mod network;
pub mod normalized;
pub mod record;

pub use environment::Environment;
pub use network::{NetworkError, OfflineNetwork};
pub use normalized::Store;
pub use record::RecordSource;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Network(#[from] NetworkError),
}
