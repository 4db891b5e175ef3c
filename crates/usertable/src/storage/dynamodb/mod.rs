//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the `UserStore`
//! trait using `aws-sdk-dynamodb`. The table is keyed by the `email` string
//! attribute.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
