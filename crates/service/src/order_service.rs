use std::sync::Arc;

use models::order::{self, Entity as OrderEntity, OrderStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::screenshot::{ImageShrinker, SHRINK_THRESHOLD_CHARS};

/// Create an order for the given session. Screenshots above the size
/// threshold are re-encoded before they reach the store; re-encoding is
/// CPU-bound and runs on the blocking pool.
#[allow(clippy::too_many_arguments)]
pub async fn create_order(
    db: &DatabaseConnection,
    shrinker: Arc<dyn ImageShrinker>,
    session_id: &str,
    category: &str,
    service: &str,
    profile_url: &str,
    quantity: i32,
    amount: f64,
    payment_screenshot: String,
) -> Result<order::Model, ServiceError> {
    let screenshot = if payment_screenshot.len() > SHRINK_THRESHOLD_CHARS {
        let original_chars = payment_screenshot.len();
        let shrunk = tokio::task::spawn_blocking(move || shrinker.shrink(payment_screenshot))
            .await
            .map_err(|e| ServiceError::Screenshot(e.to_string()))??;
        info!(
            from_chars = original_chars,
            to_chars = shrunk.len(),
            "oversized screenshot re-encoded"
        );
        shrunk
    } else {
        payment_screenshot
    };

    let created = order::create(
        db,
        session_id,
        category,
        service,
        profile_url,
        quantity,
        amount,
        screenshot,
    )
    .await?;
    Ok(created)
}

/// Orders created under the given session, newest first.
pub async fn list_orders_for_session(
    db: &DatabaseConnection,
    session_id: &str,
) -> Result<Vec<order::Model>, ServiceError> {
    OrderEntity::find()
        .filter(order::Column::SessionId.eq(session_id))
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Every order in the store, newest first.
pub async fn list_all_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> {
    OrderEntity::find()
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Overwrite the review status of an order.
pub async fn set_order_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: OrderStatus,
) -> Result<order::Model, ServiceError> {
    let current = OrderEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("order"));
    };
    let mut am: order::ActiveModel = existing.into();
    am.status = Set(status);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screenshot::PassthroughShrinker;
    use crate::test_support::get_db;

    struct MarkerShrinker;

    impl ImageShrinker for MarkerShrinker {
        fn shrink(&self, _encoded: String) -> Result<String, ServiceError> {
            Ok("SHRUNK".to_string())
        }
    }

    async fn submit(
        db: &DatabaseConnection,
        session: &str,
        service: &str,
        screenshot: String,
    ) -> Result<order::Model, ServiceError> {
        create_order(
            db,
            Arc::new(PassthroughShrinker),
            session,
            "instagram",
            service,
            "https://instagram.com/someone",
            100,
            5.0,
            screenshot,
        )
        .await
    }

    #[tokio::test]
    async fn orders_are_scoped_to_their_session_and_newest_first() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let s1 = format!("sess_a_{}", Uuid::new_v4());
        let s2 = format!("sess_b_{}", Uuid::new_v4());

        let first = submit(&db, &s1, "followers", "img1".into()).await?;
        let second = submit(&db, &s1, "likes", "img2".into()).await?;
        let other = submit(&db, &s2, "views", "img3".into()).await?;

        let mine = list_orders_for_session(&db, &s1).await?;
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.session_id == s1));
        assert!(!mine.iter().any(|o| o.id == other.id));
        for pair in mine.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }

        let all = list_all_orders(&db).await?;
        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }

        // cleanup
        for id in [first.id, second.id, other.id] {
            OrderEntity::delete_by_id(id).exec(&db).await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn status_update_persists_and_missing_order_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let session = format!("sess_c_{}", Uuid::new_v4());
        let created = submit(&db, &session, "followers", "img".into()).await?;
        assert_eq!(created.status, OrderStatus::Pending);

        let updated = set_order_status(&db, created.id, OrderStatus::Approved).await?;
        assert_eq!(updated.status, OrderStatus::Approved);

        let fetched = OrderEntity::find_by_id(created.id)
            .one(&db)
            .await?
            .expect("order exists");
        assert_eq!(fetched.status, OrderStatus::Approved);

        let err = set_order_status(&db, Uuid::new_v4(), OrderStatus::Rejected).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        // cleanup
        OrderEntity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn screenshot_below_threshold_is_stored_untouched() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let session = format!("sess_d_{}", Uuid::new_v4());
        let small = "x".repeat(1000);
        let created = create_order(
            &db,
            Arc::new(MarkerShrinker),
            &session,
            "instagram",
            "followers",
            "https://instagram.com/someone",
            1,
            1.0,
            small.clone(),
        )
        .await?;
        assert_eq!(created.payment_screenshot, small);

        // cleanup
        OrderEntity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn screenshot_above_threshold_goes_through_the_shrinker() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let session = format!("sess_e_{}", Uuid::new_v4());
        let big = "x".repeat(SHRINK_THRESHOLD_CHARS + 1);
        let created = create_order(
            &db,
            Arc::new(MarkerShrinker),
            &session,
            "instagram",
            "followers",
            "https://instagram.com/someone",
            1,
            1.0,
            big,
        )
        .await?;
        assert_eq!(created.payment_screenshot, "SHRUNK");

        // cleanup
        OrderEntity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }
}
