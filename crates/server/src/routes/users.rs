use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use service::domain::User;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let created = state.users.create(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<User>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
