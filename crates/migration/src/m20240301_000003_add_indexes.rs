use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: category filter path
        manager
            .create_index(
                Index::create()
                    .name("idx_service_category")
                    .table(Service::Table)
                    .col(Service::Category)
                    .to_owned(),
            )
            .await?;

        // Order: session-scoped listing
        manager
            .create_index(
                Index::create()
                    .name("idx_order_session")
                    .table(Order::Table)
                    .col(Order::SessionId)
                    .to_owned(),
            )
            .await?;

        // Order: newest-first listings
        manager
            .create_index(
                Index::create()
                    .name("idx_order_created_at")
                    .table(Order::Table)
                    .col(Order::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_category").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_session").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_created_at").table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Category,
}

#[derive(DeriveIden)]
enum Order {
    Table,
    SessionId,
    CreatedAt,
}
