use async_trait::async_trait;

use super::{Record, Result};

/// Point-read, point-write, scan and delete access to the user table.
///
/// Records are keyed by their `email` attribute. Implementations must make
/// each individual call atomic; nothing above this trait coordinates calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Reads the record stored under `email`, if any.
    async fn get_item(&self, email: &str) -> Result<Option<Record>>;

    /// Returns every record in the table, in whatever order the store yields them.
    async fn scan(&self) -> Result<Vec<Record>>;

    /// Writes the record, replacing any record already stored under its key.
    async fn put_item(&self, record: Record) -> Result<()>;

    /// Writes the record only if no record is stored under its key.
    ///
    /// Fails with [`StoreError::ConditionFailed`](super::StoreError::ConditionFailed)
    /// when the key is already taken.
    async fn put_item_if_absent(&self, record: Record) -> Result<()>;

    /// Deletes the record stored under `email`. Deleting a missing key succeeds.
    async fn delete_item(&self, email: &str) -> Result<()>;
}
