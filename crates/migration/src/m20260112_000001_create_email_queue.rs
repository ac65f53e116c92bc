use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Outbound email queue drained by the background sweep.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailQueue::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailQueue::Id))
                    .col(string(EmailQueue::Recipient))
                    .col(string(EmailQueue::Subject))
                    .col(text(EmailQueue::Body))
                    .col(
                        string(EmailQueue::Status)
                            .default("pending")
                            .comment("Delivery state: 'pending', 'sent' or 'failed'"),
                    )
                    .col(string(EmailQueue::CreatedAt))
                    .col(integer(EmailQueue::RetryCount).default(0))
                    .col(string_null(EmailQueue::SentAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_email_queue_status")
                    .table(EmailQueue::Table)
                    .col(EmailQueue::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailQueue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailQueue {
    Table,
    Id,
    Recipient,
    Subject,
    Body,
    Status,
    CreatedAt,
    RetryCount,
    SentAt,
}
