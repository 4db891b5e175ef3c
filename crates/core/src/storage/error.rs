use thiserror::Error;

/// Errors that can occur while talking to the key-value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Condition check failed for key: {key}")]
    ConditionFailed { key: String },
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_request_failed_display() {
        let error = StoreError::RequestFailed("throughput exceeded".to_string());
        assert_eq!(error.to_string(), "Request failed: throughput exceeded");
    }

    #[test]
    fn test_condition_failed_display() {
        let error = StoreError::ConditionFailed {
            key: "jane@example.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Condition check failed for key: jane@example.com"
        );
    }

    #[test]
    fn test_invalid_item_display() {
        let error = StoreError::InvalidItem("missing key attribute".to_string());
        assert_eq!(error.to_string(), "Invalid item: missing key attribute");
    }
}
