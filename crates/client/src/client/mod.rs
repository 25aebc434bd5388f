//! HTTP client for the project API.

pub mod projects;

use crate::error::{ClientError, Result};

/// HTTP client for the project API.
#[derive(Debug, Clone)]
pub struct ProjectApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectApiClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (PROJECTAPI_URL or default).
    pub fn from_env() -> Self {
        let base_url = std::env::var("PROJECTAPI_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-success statuses into errors.
    async fn check_status(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            404 => Err(ClientError::NotFound {
                resource: resource.to_string(),
            }),
            409 => Err(ClientError::Conflict { message }),
            code => Err(ClientError::ServerError {
                status: code,
                message,
            }),
        }
    }

    /// Handle responses carrying a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let response = self.check_status(response, resource).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        self.check_status(response, resource).await?;
        Ok(())
    }
}
