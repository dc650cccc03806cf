use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| configs::DEFAULT_DATABASE_URL.to_string())
});

/// Connect using `DATABASE_URL` (or the dev fallback). Used by tests and
/// tooling that run outside the configured server process.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(DATABASE_URL.as_str()).await?;
    Ok(db)
}

/// Connect with explicit pool settings from the application config.
pub async fn connect_with(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}
