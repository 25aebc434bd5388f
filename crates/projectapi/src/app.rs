use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/project", get(list_projects).post(create_project))
        .route(
            "/project/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .layer(cors);

    let timeout = state.request_timeout;

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use projectapi_core::project::ProjectRow;
    use projectapi_core::storage::{ProjectRepository, RepositoryError, Result};
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    fn alpha() -> serde_json::Value {
        serde_json::json!({
            "ConsultantID": "c1",
            "ClientID": "k1",
            "Name": "Alpha",
            "Description": "",
            "StartDate": "2024-01-01",
            "EndDate": "2024-06-01"
        })
    }

    async fn create(app: &Router, body: serde_json::Value) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/project", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request(Method::GET, "/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_projects_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request(Method::GET, "/api/project"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Vec<serde_json::Value> = body_json(response).await;
        assert!(json.is_empty());
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let app = create_app(AppState::default());

        // Create
        let created = create(&app, alpha()).await;
        let id = created["ID"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(created["Name"], "Alpha");
        assert_eq!(created["ConsultantID"], "c1");
        assert_eq!(created["ClientID"], "k1");

        // List
        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/api/project"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<serde_json::Value> = body_json(response).await;
        assert_eq!(listed, vec![created.clone()]);

        // Update only the name
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/project/{id}"),
                serde_json::json!({"Name": "Alpha-2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: serde_json::Value = body_json(response).await;
        assert_eq!(updated["Name"], "Alpha-2");
        assert_eq!(updated["ID"], created["ID"]);
        assert_eq!(updated["StartDate"], created["StartDate"]);
        assert_eq!(updated["EndDate"], created["EndDate"]);
        assert_eq!(updated["Description"], created["Description"]);

        // Get reflects the update
        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, &format!("/api/project/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: serde_json::Value = body_json(response).await;
        assert_eq!(fetched, updated);

        // Delete
        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/api/project/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());

        // Gone
        let response = app
            .oneshot(empty_request(Method::GET, &format!("/api/project/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_creates_get_distinct_ids() {
        let app = create_app(AppState::default());

        let first = create(&app, alpha()).await;
        let second = create(&app, alpha()).await;

        assert_ne!(first["ID"], second["ID"]);

        let response = app
            .oneshot(empty_request(Method::GET, "/api/project"))
            .await
            .unwrap();
        let listed: Vec<serde_json::Value> = body_json(response).await;
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_bad_request() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/project")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Missing content type is rejected the same way
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/project")
                    .body(Body::from(alpha().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_dates_is_bad_request() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/project",
                serde_json::json!({"Name": "Alpha"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_project() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request(Method::GET, "/api/project/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_unknown_project() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/api/project/does-not-exist",
                serde_json::json!({"Name": "Ghost"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_with_malformed_body_is_bad_request() {
        let app = create_app(AppState::default());
        let created = create(&app, alpha()).await;
        let id = created["ID"].as_str().unwrap();

        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/project/{id}"),
                serde_json::json!({"StartDate": "yesterday"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_with_empty_fields_keeps_values() {
        let app = create_app(AppState::default());
        let created = create(&app, alpha()).await;
        let id = created["ID"].as_str().unwrap();

        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/project/{id}"),
                serde_json::json!({"Name": "", "Description": null, "StartDate": null}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: serde_json::Value = body_json(response).await;
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_delete_unknown_project() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request(Method::DELETE, "/api/project/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Repository where another writer replaces the row right after every read.
    struct RacingRepository {
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl ProjectRepository for RacingRepository {
        async fn get_project(&self, id: &str) -> Result<Option<ProjectRow>> {
            let row = self.inner.get_project(id).await?;
            if let Some(row) = &row {
                let mut other = row.clone();
                other.name = "Other writer".to_string();
                self.inner.replace_project(&other).await?;
            }
            Ok(row)
        }

        async fn list_projects(&self) -> Result<Vec<ProjectRow>> {
            self.inner.list_projects().await
        }

        async fn create_project(&self, row: &ProjectRow) -> Result<()> {
            self.inner.create_project(row).await
        }

        async fn replace_project(&self, row: &ProjectRow) -> Result<ProjectRow> {
            self.inner.replace_project(row).await
        }

        async fn delete_project(&self, id: &str) -> Result<()> {
            self.inner.delete_project(id).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_update_is_conflict() {
        let inner = InMemoryRepository::new();
        let state = AppState {
            project_repo: Arc::new(RacingRepository {
                inner: inner.clone(),
            }),
            ..AppState::default()
        };
        let app = create_app(state);
        let created = create(&app, alpha()).await;
        let id = created["ID"].as_str().unwrap();

        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/project/{id}"),
                serde_json::json!({"Name": "Alpha-2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        // The other writer's change survives
        let stored = inner.get_project(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Other writer");
        assert!(matches!(
            inner.replace_project(&ProjectRow { version: 1, ..stored }).await,
            Err(RepositoryError::Conflict { .. })
        ));
    }
}
