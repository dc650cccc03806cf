use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::db::connect;
use crate::{order, service};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_service_create_and_find() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let category = format!("cat_{}", Uuid::new_v4());
    let created = service::create(&db, &category, "followers", 5.0).await?;
    assert_eq!(created.category, category);
    assert_eq!(created.name, "followers");
    assert_eq!(created.price, 5.0);

    let found = service::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    let by_category = service::Entity::find()
        .filter(service::Column::Category.eq(category.clone()))
        .all(&db)
        .await?;
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, created.id);

    // cleanup
    service::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_service_create_rejects_bad_input() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    assert!(service::create(&db, "", "followers", 5.0).await.is_err());
    assert!(service::create(&db, "instagram", " ", 5.0).await.is_err());
    assert!(service::create(&db, "instagram", "followers", -1.0).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_order_defaults_to_pending() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let session = format!("sess_test_{}", Uuid::new_v4());
    let created = order::create(
        &db,
        &session,
        "instagram",
        "followers",
        "https://instagram.com/someone",
        100,
        5.0,
        "aGVsbG8=".to_string(),
    )
    .await?;
    assert_eq!(created.status, order::OrderStatus::Pending);
    assert_eq!(created.session_id, session);

    let found = order::Entity::find_by_id(created.id).one(&db).await?.expect("order exists");
    assert_eq!(found.status, order::OrderStatus::Pending);

    // cleanup
    order::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_order_create_requires_session_and_quantity() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let err = order::create(&db, "", "instagram", "followers", "url", 1, 1.0, String::new()).await;
    assert!(err.is_err());
    let err = order::create(&db, "sess_x_1", "instagram", "followers", "url", 0, 1.0, String::new()).await;
    assert!(err.is_err());
    Ok(())
}
