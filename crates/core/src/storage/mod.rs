mod error;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, StoreError};
pub use traits::UserStore;

/// A stored item: attribute names mapped to JSON values.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Name of the attribute the table is keyed by.
pub const KEY_ATTRIBUTE: &str = "email";

/// Extracts the key attribute of a record.
pub fn record_key(record: &Record) -> Result<&str> {
    record
        .get(KEY_ATTRIBUTE)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            StoreError::InvalidItem(format!("Missing or invalid key attribute: {KEY_ATTRIBUTE}"))
        })
}
