use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(uuid(Order::Id).primary_key())
                    .col(string_len(Order::SessionId, 128).not_null())
                    .col(string_len(Order::Category, 128).not_null())
                    .col(string_len(Order::Service, 256).not_null())
                    .col(string_len(Order::ProfileUrl, 1024).not_null())
                    .col(integer(Order::Quantity).not_null())
                    .col(double(Order::Amount).not_null())
                    // base64 screenshots run to megabytes; keep unbounded text
                    .col(text(Order::PaymentScreenshot).not_null())
                    .col(string_len(Order::Status, 16).not_null().default("pending"))
                    .col(timestamp_with_time_zone(Order::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order {
    Table,
    Id,
    SessionId,
    Category,
    Service,
    ProfileUrl,
    Quantity,
    Amount,
    PaymentScreenshot,
    Status,
    CreatedAt,
}
