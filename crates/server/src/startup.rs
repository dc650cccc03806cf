use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum_extra::extract::cookie::Key;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::screenshot::JpegShrinker;

use crate::admin::{AdminAuthConfig, ServerState};
use crate::routes;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    // DB connection, injected into every handler through the state
    let db = models::db::connect_with(&cfg.database).await?;

    let state = ServerState {
        db,
        session_key: Key::derive_from(cfg.session.secret.as_bytes()),
        session_max_age_days: cfg.session.max_age_days,
        auth: AdminAuthConfig { token: cfg.admin.token.clone() },
        shrinker: Arc::new(JpegShrinker::default()),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting storefront server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
