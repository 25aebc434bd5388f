//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use projectapi_core::project::{ProjectRow, PROJECT_PARTITION_KEY};
use projectapi_core::storage::{ProjectRepository, RepositoryError, Result};

type RowKey = (String, String);

fn project_key(id: &str) -> RowKey {
    (PROJECT_PARTITION_KEY.to_string(), id.to_string())
}

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<RwLock<HashMap<RowKey, ProjectRow>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRepository {
    async fn get_project(&self, id: &str) -> Result<Option<ProjectRow>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&project_key(id)).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRow>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|((partition, _), _)| partition == PROJECT_PARTITION_KEY)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn create_project(&self, row: &ProjectRow) -> Result<()> {
        let mut rows = self.rows.write().await;
        let key = (row.partition_key.clone(), row.row_key.clone());
        if rows.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Project",
                id: row.row_key.clone(),
            });
        }
        rows.insert(key, row.clone());
        Ok(())
    }

    async fn replace_project(&self, row: &ProjectRow) -> Result<ProjectRow> {
        let mut rows = self.rows.write().await;
        let key = (row.partition_key.clone(), row.row_key.clone());

        let stored = rows
            .get_mut(&key)
            .ok_or_else(|| RepositoryError::project_not_found(row.row_key.clone()))?;

        if stored.version != row.version {
            return Err(RepositoryError::Conflict {
                entity_type: "Project",
                id: row.row_key.clone(),
            });
        }

        let persisted = row.clone().with_version(row.version + 1);
        *stored = persisted.clone();
        Ok(persisted)
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.remove(&project_key(id)).is_none() {
            return Err(RepositoryError::project_not_found(id));
        }
        Ok(())
    }
}
