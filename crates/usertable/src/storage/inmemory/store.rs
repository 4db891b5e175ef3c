//! In-memory `UserStore` implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use usertable_core::storage::{record_key, Record, Result, StoreError, UserStore};

/// In-memory user table.
///
/// Data is not persisted and will be lost when the store is dropped. Scan
/// order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<String, Record>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn get_item(&self, email: &str) -> Result<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }

    async fn scan(&self) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn put_item(&self, record: Record) -> Result<()> {
        let key = record_key(&record)?.to_string();
        self.records.write().await.insert(key, record);
        Ok(())
    }

    async fn put_item_if_absent(&self, record: Record) -> Result<()> {
        let key = record_key(&record)?.to_string();
        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            return Err(StoreError::ConditionFailed { key });
        }
        records.insert(key, record);
        Ok(())
    }

    async fn delete_item(&self, email: &str) -> Result<()> {
        self.records.write().await.remove(email);
        Ok(())
    }
}
