use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("network is not configured")]
    Unavailable,
}

/// Fetch strategy used by the environment.
pub trait Network: Send {
    fn fetch(&self, query: &str, variables: &Value) -> Result<Value, NetworkError>;
}

impl<F> Network for F
where
    F: Fn(&str, &Value) -> Result<Value, NetworkError> + Send,
{
    fn fetch(&self, query: &str, variables: &Value) -> Result<Value, NetworkError> {
        self(query, variables)
    }
}

/// Network for a dashboard with no backend attached. Every fetch fails
/// with [`NetworkError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineNetwork;

impl Network for OfflineNetwork {
    fn fetch(&self, _query: &str, _variables: &Value) -> Result<Value, NetworkError> {
        Err(NetworkError::Unavailable)
    }
}
