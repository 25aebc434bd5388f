//! Project API operations.

use super::ProjectApiClient;
use crate::error::Result;
use projectapi_core::project::{CreateProjectRequest, Project, UpdateProjectRequest};

impl ProjectApiClient {
    /// List all projects.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self.client.get(self.url("/api/project")).send().await?;
        self.handle_response(response, "projects").await
    }

    /// Create a new project. The server assigns the ID.
    pub async fn create_project(&self, req: &CreateProjectRequest) -> Result<Project> {
        let response = self
            .client
            .post(self.url("/api/project"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "projects").await
    }

    /// Get project by ID.
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        let response = self
            .client
            .get(self.url(&format!("/api/project/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("project {}", id))
            .await
    }

    /// Partially update a project.
    pub async fn update_project(&self, id: &str, req: &UpdateProjectRequest) -> Result<Project> {
        let response = self
            .client
            .put(self.url(&format!("/api/project/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("project {}", id))
            .await
    }

    /// Delete project by ID.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/project/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response, &format!("project {}", id))
            .await
    }
}
