use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceInputDoc {
    pub category: String,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInputDoc {
    pub category: String,
    pub service: String,
    pub profile_url: String,
    pub quantity: i32,
    pub amount: f64,
    pub payment_screenshot: String,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateOrderStatusInputDoc {
    /// one of: pending, approved, rejected
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::list_services,
        crate::routes::catalog::list_services_by_category,
        crate::routes::catalog::list_services_admin,
        crate::routes::catalog::create_service,
        crate::routes::catalog::update_service,
        crate::routes::catalog::delete_service,
        crate::routes::orders::create_order,
        crate::routes::orders::list_my_orders,
        crate::routes::orders::list_all_orders,
        crate::routes::orders::set_order_status,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceInputDoc,
            CreateOrderInputDoc,
            UpdateOrderStatusInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "orders"),
        (name = "admin")
    )
)]
pub struct ApiDoc;
