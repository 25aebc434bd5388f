use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the table store (default: unset).
    ///
    /// For the DynamoDB backend this is the endpoint URL, e.g. a local
    /// DynamoDB at `http://localhost:8000`. When unset the AWS default
    /// chain decides.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub storage_connection_string: Option<String>,
    /// Name of the table holding project rows (default: "projects")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_CONNECTION_STRING` - Table store endpoint (default: unset)
    /// - `PROJECTS_TABLE_NAME` - Table name (default: "projects")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            storage_connection_string: env::var("STORAGE_CONNECTION_STRING")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            table_name: env::var("PROJECTS_TABLE_NAME").unwrap_or_else(|_| "projects".to_string()),
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
