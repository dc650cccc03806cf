use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// Review status of a customer order. Stored as a short string column;
/// the enum keeps every value in the three-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Parse a status value submitted over the API.
pub fn parse_status(s: &str) -> Result<OrderStatus, errors::ModelError> {
    match s {
        "pending" => Ok(OrderStatus::Pending),
        "approved" => Ok(OrderStatus::Approved),
        "rejected" => Ok(OrderStatus::Rejected),
        other => Err(errors::ModelError::Validation(format!("invalid status: {other}"))),
    }
}

/// A customer submission: what was ordered, where to deliver the boost,
/// and the proof-of-payment screenshot awaiting review.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub session_id: String,
    pub category: String,
    pub service: String,
    pub profile_url: String,
    pub quantity: i32,
    pub amount: f64,
    #[sea_orm(column_type = "Text")]
    pub payment_screenshot: String,
    pub status: OrderStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_quantity(quantity: i32) -> Result<(), errors::ModelError> {
    if quantity < 1 {
        return Err(errors::ModelError::Validation("quantity must be at least 1".into()));
    }
    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<(), errors::ModelError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(errors::ModelError::Validation("amount must be non-negative".into()));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    session_id: &str,
    category: &str,
    service: &str,
    profile_url: &str,
    quantity: i32,
    amount: f64,
    payment_screenshot: String,
) -> Result<Model, errors::ModelError> {
    if session_id.trim().is_empty() {
        return Err(errors::ModelError::Validation("session id required".into()));
    }
    validate_quantity(quantity)?;
    validate_amount(amount)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        session_id: Set(session_id.to_string()),
        category: Set(category.to_string()),
        service: Set(service.to_string()),
        profile_url: Set(profile_url.to_string()),
        quantity: Set(quantity),
        amount: Set(amount),
        payment_screenshot: Set(payment_screenshot),
        status: Set(OrderStatus::Pending),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
