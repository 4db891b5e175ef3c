//! Store fake with failure injection for core tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{record_key, Record, Result, StoreError, UserStore};

#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    records: Mutex<BTreeMap<String, Record>>,
    pub fail_get: AtomicBool,
    pub fail_scan: AtomicBool,
    pub fail_put: AtomicBool,
    pub fail_delete: AtomicBool,
    /// Makes `get_item` report nothing, as if a concurrent writer had not landed yet.
    pub blind_get: AtomicBool,
    pub writes: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw record, bypassing the user codec.
    pub fn insert_raw(&self, key: &str, record: Record) {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn raw(&self, key: &str) -> Option<Record> {
        self.records.lock().unwrap().get(key).cloned()
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    fn failing(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn get_item(&self, email: &str) -> Result<Option<Record>> {
        if Self::failing(&self.fail_get) {
            return Err(StoreError::RequestFailed("injected get failure".to_string()));
        }
        if Self::failing(&self.blind_get) {
            return Ok(None);
        }
        Ok(self.records.lock().unwrap().get(email).cloned())
    }

    async fn scan(&self) -> Result<Vec<Record>> {
        if Self::failing(&self.fail_scan) {
            return Err(StoreError::RequestFailed("injected scan failure".to_string()));
        }
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn put_item(&self, record: Record) -> Result<()> {
        if Self::failing(&self.fail_put) {
            return Err(StoreError::RequestFailed("injected put failure".to_string()));
        }
        let key = record_key(&record)?.to_string();
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().insert(key, record);
        Ok(())
    }

    async fn put_item_if_absent(&self, record: Record) -> Result<()> {
        if Self::failing(&self.fail_put) {
            return Err(StoreError::RequestFailed("injected put failure".to_string()));
        }
        let key = record_key(&record)?.to_string();
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&key) {
            return Err(StoreError::ConditionFailed { key });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        records.insert(key, record);
        Ok(())
    }

    async fn delete_item(&self, email: &str) -> Result<()> {
        if Self::failing(&self.fail_delete) {
            return Err(StoreError::RequestFailed(
                "injected delete failure".to_string(),
            ));
        }
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}
