//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is selected at compile time via
//! feature flags.

use std::{sync::Arc, time::Duration};

use projectapi_core::storage::ProjectRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Project repository.
    pub project_repo: Arc<dyn ProjectRepository>,
    /// Router-wide request timeout.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around an already-built repository.
    pub fn with_repository(project_repo: Arc<dyn ProjectRepository>, config: &Config) -> Self {
        Self {
            project_repo,
            request_timeout: config.request_timeout(),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory project storage");
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::with_repository(repo, config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::connect(
                config.storage_connection_string.as_deref(),
                &config.table_name,
            )
            .await;
            Ok(Self::with_repository(Arc::new(repo), config))
        }
    }
}
