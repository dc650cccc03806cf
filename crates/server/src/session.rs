use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use time::Duration;

use crate::admin::ServerState;

pub const SESSION_COOKIE: &str = "session_id";

/// Session identifier resolved for the current request, available to
/// handlers as a request extension.
#[derive(Clone, Debug)]
pub struct SessionId(pub String);

/// Middleware: reuse the signed session cookie when present, otherwise mint
/// a token and set the cookie on the response. Never fails; a cookie that
/// fails signature verification is treated as absent.
pub async fn resolve_session(
    State(state): State<ServerState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let (jar, session_id) = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let value = cookie.value().to_string();
            (jar, value)
        }
        None => {
            let token = common::session::generate_session_token();
            let mut cookie = Cookie::new(SESSION_COOKIE, token.clone());
            cookie.set_path("/");
            cookie.set_http_only(true);
            // correlation key only, not a credential
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Lax);
            cookie.set_max_age(Duration::days(state.session_max_age_days));
            (jar.add(cookie), token)
        }
    };
    req.extensions_mut().insert(SessionId(session_id));
    let response = next.run(req).await;
    (jar, response).into_response()
}
