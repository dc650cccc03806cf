use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use service::catalog_service;
use service::errors::ServiceError;

use crate::admin::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ServiceInput {
    pub category: String,
    pub name: String,
    pub price: f64,
}

#[utoipa::path(
    get, path = "/api/services", tag = "catalog",
    responses(
        (status = 200, description = "All catalog services"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_services(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::service::Model>>, JsonApiError> {
    match catalog_service::list_services(&state.db).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to load services",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    get, path = "/api/services/{category}", tag = "catalog",
    params(("category" = String, Path, description = "Category label, exact match")),
    responses(
        (status = 200, description = "Services in the category"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_services_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<models::service::Model>>, JsonApiError> {
    match catalog_service::list_services_by_category(&state.db, &category).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to load services",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    get, path = "/api/admin/services", tag = "admin",
    responses(
        (status = 200, description = "All catalog services"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_services_admin(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::service::Model>>, JsonApiError> {
    list_services(State(state)).await
}

#[utoipa::path(
    post, path = "/api/admin/services", tag = "admin",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_service(
    State(state): State<ServerState>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Value>, JsonApiError> {
    match catalog_service::create_service(&state.db, &input.category, &input.name, input.price).await
    {
        Ok(created) => {
            info!(id = %created.id, category = %created.category, name = %created.name, "service created");
            Ok(Json(json!({ "success": true })))
        }
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, msg, None))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to create service",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    put, path = "/api/admin/services/{id}", tag = "admin",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 404, description = "Unknown service id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Value>, JsonApiError> {
    match catalog_service::update_service(&state.db, id, &input.category, &input.name, input.price)
        .await
    {
        Ok(updated) => {
            info!(id = %updated.id, "service updated");
            Ok(Json(json!({ "success": true })))
        }
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, msg, None))
        }
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, msg, None)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to update service",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    delete, path = "/api/admin/services/{id}", tag = "admin",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 404, description = "Unknown service id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, JsonApiError> {
    match catalog_service::delete_service(&state.db, id).await {
        Ok(true) => {
            info!(%id, "service deleted");
            Ok(Json(json!({ "success": true })))
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "service not found", None)),
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to delete service",
            Some(e.to_string()),
        )),
    }
}
