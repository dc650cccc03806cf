use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::{middleware, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::admin;
use crate::openapi::ApiDoc;
use crate::session;

pub mod catalog;
pub mod orders;

/// Request bodies up to 50 MB, to admit base64-encoded screenshots.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public, customer, and admin routes
pub fn build_router(cors: CorsLayer, state: admin::ServerState) -> Router {
    let public = Router::new().route("/health", get(health));

    // Customer routes; the session resolver scopes order visibility
    let customer = Router::new()
        .route("/api/services", get(catalog::list_services))
        .route("/api/services/:category", get(catalog::list_services_by_category))
        .route("/api/orders", get(orders::list_my_orders).post(orders::create_order));

    // Admin routes behind the shared-token boundary
    let admin_routes = Router::new()
        .route("/api/admin/orders", get(orders::list_all_orders))
        .route("/api/admin/orders/:id", put(orders::set_order_status))
        .route(
            "/api/admin/services",
            get(catalog::list_services_admin).post(catalog::create_service),
        )
        .route(
            "/api/admin/services/:id",
            put(catalog::update_service).delete(catalog::delete_service),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin_token,
        ));

    public
        .merge(customer)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // session resolution runs on every request, admin included
        .layer(middleware::from_fn_with_state(state, session::resolve_session))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
