//! Application state.
//!
//! Holds the store handle every request runs against. The backend is chosen
//! at compile time via feature flags.

use std::{sync::Arc, time::Duration};

use usertable_core::storage::UserStore;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. The store is immutable after startup and
/// safe to use from concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// User table access.
    pub store: Arc<dyn UserStore>,
    /// How long a request may run before it is answered with 408.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: &Config) -> Self {
        Self {
            store,
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates the state for the compiled-in storage backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::InMemoryStore;

        tracing::info!("Using in-memory storage");
        Ok(Self::new(Arc::new(InMemoryStore::new()), config))
    }

    /// Creates the state for the compiled-in storage backend.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::DynamoDbStore;

        let store = DynamoDbStore::from_config(config).await;
        tracing::info!(table = %store.table_name(), "Using DynamoDB storage");
        Ok(Self::new(Arc::new(store), config))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        use crate::storage::InMemoryStore;

        Self {
            store: Arc::new(InMemoryStore::new()),
            request_timeout: Duration::from_secs(10),
        }
    }
}
