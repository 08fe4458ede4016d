use std::{io, net::SocketAddr, sync::Arc};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig};
use dotenvy::dotenv;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::routes::{self, AppState};
use service::repo::seaorm::{SeaOrmPlayerRepository, SeaOrmUserRepository};
use service::{PlayerService, UserService};

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,sqlx=warn`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// CORS layer from configuration: the listed origins only, the four CRUD
/// verbs plus preflight, JSON bodies.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Public entry: load configuration, open the store, run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_and_validate()?;

    // DB connection and tables
    let db = models::db::connect(&cfg.database).await?;
    models::schema::ensure_schema(&db).await?;

    let state = AppState {
        users: Arc::new(UserService::new(Arc::new(SeaOrmUserRepository {
            db: db.clone(),
        }))),
        players: Arc::new(PlayerService::new(Arc::new(SeaOrmPlayerRepository { db }))),
    };

    // Build router
    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
