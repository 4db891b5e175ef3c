use std::{env, time::Duration};

/// Table the service has always used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "go-serverless";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the user table (default: "go-serverless")
    pub table_name: String,
    /// AWS region override; the default provider chain decides when unset.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: Option<String>,
    /// Custom DynamoDB endpoint, e.g. a local emulator.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - User table name (default: "go-serverless")
    /// - `AWS_REGION` - AWS region (optional)
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (optional)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
            aws_region: non_empty_var("AWS_REGION"),
            aws_endpoint_url: non_empty_var("AWS_ENDPOINT_URL"),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
