use std::sync::Arc;

use axum::extract::{FromRef, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;
use service::screenshot::ImageShrinker;

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct AdminAuthConfig {
    pub token: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub session_key: Key,
    pub session_max_age_days: i64,
    pub auth: AdminAuthConfig,
    pub shrinker: Arc<dyn ImageShrinker>,
}

impl FromRef<ServerState> for Key {
    fn from_ref(state: &ServerState) -> Key {
        state.session_key.clone()
    }
}

/// Middleware: require a valid X-Admin-Token (or query `admin_token`) on
/// admin routes.
pub async fn require_admin_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let token_from_header = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let token = if let Some(t) = token_from_header {
        Some(t)
    } else {
        // fallback to query param
        req.uri().query().and_then(token_from_query)
    };

    let token = match token {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return Err(JsonApiError::new(
                StatusCode::UNAUTHORIZED,
                "admin token required",
                None,
            ))
        }
    };

    if token != state.auth.token {
        return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "invalid admin token", None));
    }

    Ok(next.run(req).await)
}

fn token_from_query(q: &str) -> Option<String> {
    q.split('&').find_map(|pair| {
        let mut it = pair.splitn(2, '=');
        match (it.next(), it.next()) {
            (Some("admin_token"), Some(v)) => Some(v.to_string()),
            _ => None,
        }
    })
}
