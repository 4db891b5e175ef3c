//! In-memory storage backend.
//!
//! Stores all records in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.

mod store;

pub use store::InMemoryStore;
