use super::network::Network;
use super::normalized::Store;
use super::record::DataId;
use super::StoreError;
use serde_json::Value;
use std::fmt;

/// Network plus store, handed opaquely to the router's resolver.
pub struct Environment {
    network: Box<dyn Network>,
    store: Store,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("records", &self.store.record_count())
            .finish_non_exhaustive()
    }
}

impl Environment {
    pub fn new<N>(network: N, store: Store) -> Self
    where
        N: Network + 'static,
    {
        Self {
            network: Box::new(network),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetch `query` and publish the response's `data` (or the whole
    /// response if it has no `data` key) into the store.
    pub fn execute(&mut self, query: &str, variables: &Value) -> Result<Vec<DataId>, StoreError> {
        let response = self.network.fetch(query, variables)?;
        let data = response.get("data").unwrap_or(&response);
        self.store.publish(data)
    }
}
