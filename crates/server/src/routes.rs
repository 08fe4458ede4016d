use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use service::repo::seaorm::{SeaOrmPlayerRepository, SeaOrmUserRepository};
use service::{PlayerService, UserService};

pub mod players;
pub mod users;

/// Shared handler state: one service per resource, both backed by the same
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<SeaOrmUserRepository>>,
    pub players: Arc<PlayerService<SeaOrmPlayerRepository>>,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: both resource collections, the health
/// probe, CORS and request tracing
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/api/players", get(players::list).post(players::create))
        .route(
            "/api/players/:id",
            get(players::get).put(players::update).delete(players::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path, at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // response line carries status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
