use async_trait::async_trait;

use crate::project::ProjectRow;

use super::Result;

/// Repository for project rows in the `PROJECT` partition.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Point lookup by row key. Unknown IDs yield `None`.
    async fn get_project(&self, id: &str) -> Result<Option<ProjectRow>>;

    /// Reads every row of the project partition, following all result pages.
    async fn list_projects(&self) -> Result<Vec<ProjectRow>>;

    /// Inserts a new row. Fails with `AlreadyExists` if the row key is taken.
    async fn create_project(&self, row: &ProjectRow) -> Result<()>;

    /// Replaces a row, provided the stored version still equals `row.version`.
    ///
    /// Returns the persisted row, whose version is one higher. Fails with
    /// `NotFound` if the row is gone and `Conflict` if another writer got
    /// there first.
    async fn replace_project(&self, row: &ProjectRow) -> Result<ProjectRow>;

    /// Deletes a row regardless of its version. Fails with `NotFound` if absent.
    async fn delete_project(&self, id: &str) -> Result<()>;
}
