use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use service::errors::ServiceError;
use service::order_service;

use crate::admin::ServerState;
use crate::errors::JsonApiError;
use crate::session::SessionId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub category: String,
    pub service: String,
    pub profile_url: String,
    pub quantity: i32,
    pub amount: f64,
    pub payment_screenshot: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub status: String,
}

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderInputDoc,
    responses(
        (status = 200, description = "Order accepted for review"),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_order(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionId>,
    Json(input): Json<CreateOrderInput>,
) -> Result<Json<Value>, JsonApiError> {
    match order_service::create_order(
        &state.db,
        state.shrinker.clone(),
        &session.0,
        &input.category,
        &input.service,
        &input.profile_url,
        input.quantity,
        input.amount,
        input.payment_screenshot,
    )
    .await
    {
        Ok(order) => {
            info!(order_id = %order.id, category = %order.category, service = %order.service, "order created");
            Ok(Json(json!({ "success": true, "orderId": order.id })))
        }
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, msg, None))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to create order",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    get, path = "/api/orders", tag = "orders",
    responses(
        (status = 200, description = "Caller's orders, newest first"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_my_orders(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<Vec<models::order::Model>>, JsonApiError> {
    match order_service::list_orders_for_session(&state.db, &session.0).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to load orders",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    get, path = "/api/admin/orders", tag = "admin",
    responses(
        (status = 200, description = "All orders, newest first"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_all_orders(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::order::Model>>, JsonApiError> {
    match order_service::list_all_orders(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "admin listed orders");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to load orders",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    put, path = "/api/admin/orders/{id}", tag = "admin",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = crate::openapi::UpdateOrderStatusInputDoc,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Unknown status value"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 404, description = "Unknown order id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn set_order_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateOrderStatusInput>,
) -> Result<Json<Value>, JsonApiError> {
    let status = match models::order::parse_status(&input.status) {
        Ok(s) => s,
        Err(e) => return Err(JsonApiError::new(StatusCode::BAD_REQUEST, e.to_string(), None)),
    };
    match order_service::set_order_status(&state.db, id, status).await {
        Ok(updated) => {
            info!(order_id = %updated.id, status = %input.status, "order status updated");
            Ok(Json(json!({ "success": true })))
        }
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, msg, None)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to update order status",
            Some(e.to_string()),
        )),
    }
}
