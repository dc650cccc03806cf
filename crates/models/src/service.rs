use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// A purchasable boosting package in the catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub price: f64,
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

pub fn validate_category(category: &str) -> Result<(), errors::ModelError> {
    if category.trim().is_empty() {
        return Err(errors::ModelError::Validation("category required".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be non-negative".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    category: &str,
    name: &str,
    price: f64,
) -> Result<Model, errors::ModelError> {
    validate_category(category)?;
    validate_name(name)?;
    validate_price(price)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        category: Set(category.to_string()),
        name: Set(name.to_string()),
        price: Set(price),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
