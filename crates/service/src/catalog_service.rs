use models::service::{self, Entity as ServiceEntity};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::ServiceError;

/// List every catalog service. No ordering guarantee.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, ServiceError> {
    ServiceEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// List catalog services whose category matches exactly.
pub async fn list_services_by_category(
    db: &DatabaseConnection,
    category: &str,
) -> Result<Vec<service::Model>, ServiceError> {
    ServiceEntity::find()
        .filter(service::Column::Category.eq(category))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a catalog service after validation.
pub async fn create_service(
    db: &DatabaseConnection,
    category: &str,
    name: &str,
    price: f64,
) -> Result<service::Model, ServiceError> {
    // validations live in models::service
    let created = service::create(db, category, name, price).await?;
    Ok(created)
}

/// Overwrite the three mutable fields of a catalog service.
pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    category: &str,
    name: &str,
    price: f64,
) -> Result<service::Model, ServiceError> {
    service::validate_category(category)?;
    service::validate_name(name)?;
    service::validate_price(price)?;
    let current = ServiceEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("service"));
    };
    let mut am: service::ActiveModel = existing.into();
    am.category = Set(category.to_string());
    am.name = Set(name.to_string());
    am.price = Set(price);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a catalog service; returns true if a row was removed.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = ServiceEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
