use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use service::domain::Player;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state.players.list().await?;
    info!(count = players.len(), "list players");
    Ok(Json(players))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    Ok(Json(state.players.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(player): Json<Player>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let created = state.players.create(player).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<Player>,
) -> Result<Json<Player>, ApiError> {
    Ok(Json(state.players.update(id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.players.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
