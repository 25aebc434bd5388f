//! Project CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use projectapi_core::project::{CreateProjectRequest, Project, ProjectRow, UpdateProjectRequest};
use projectapi_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Create an error response with logging.
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg).into_response()
}

/// Turns a body rejection into a 400 regardless of the rejection kind.
fn bad_body(rejection: JsonRejection) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Failed to parse request body: {}", rejection.body_text()),
    )
}

fn storage_error(err: RepositoryError) -> Response {
    AppError::from(err).into_response()
}

/// Create a new project (POST /api/project).
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<Json<Project>, Response> {
    let Json(payload) = body.map_err(bad_body)?;

    tracing::debug!(name = %payload.name, "Received create project request");

    let project = payload.into_project();
    let row = ProjectRow::from_project(&project);

    state
        .project_repo
        .create_project(&row)
        .await
        .map_err(storage_error)?;

    tracing::info!(project_id = %project.id, name = %project.name, "Created project");

    Ok(Json(project))
}

/// List every project (GET /api/project).
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let rows = state.project_repo.list_projects().await?;

    tracing::debug!(count = rows.len(), "Listed projects");

    Ok(Json(rows.into_iter().map(ProjectRow::into_project).collect()))
}

/// Get a single project by ID (GET /api/project/{id}).
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, Response> {
    let row = state
        .project_repo
        .get_project(&id)
        .await
        .map_err(storage_error)?;

    match row {
        Some(row) => Ok(Json(row.into_project())),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Project not found: {id}"),
        )),
    }
}

/// Partially update a project (PUT /api/project/{id}).
///
/// Fields that are null or empty in the body keep their stored value. The
/// write is conditional on the version that was read, so a concurrent
/// update in between yields 409 instead of being overwritten.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<Json<Project>, Response> {
    let Json(payload) = body.map_err(bad_body)?;

    tracing::debug!(project_id = %id, ?payload, "Received update project request");

    let existing = state
        .project_repo
        .get_project(&id)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| {
            error_response(StatusCode::NOT_FOUND, format!("Project not found: {id}"))
        })?;

    let version = existing.version;
    let mut project = existing.into_project();
    payload.apply_to(&mut project);

    let row = ProjectRow::from_project(&project).with_version(version);
    let persisted = state
        .project_repo
        .replace_project(&row)
        .await
        .map_err(storage_error)?;

    tracing::info!(project_id = %id, version = persisted.version, "Updated project");

    Ok(Json(persisted.into_project()))
}

/// Delete a project by ID (DELETE /api/project/{id}).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.project_repo.delete_project(&id).await?;

    tracing::info!(project_id = %id, "Deleted project");

    Ok(StatusCode::OK)
}
