use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Member accounts and the per-account newsletter dispatch log.
///
/// `newsletter_logs.user_email` is a plain lookup value, not a foreign key: the
/// unsubscribe flow removes the log rows itself before removing the account.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::HashedPassword))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsletterLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsletterLogs::Id))
                    .col(string(NewsletterLogs::UserEmail))
                    .col(string(NewsletterLogs::SentAt))
                    .col(
                        ColumnDef::new(NewsletterLogs::Status)
                            .string()
                            .not_null()
                            .comment("Dispatch outcome: 'sent' or 'failed'"),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_newsletter_logs_user_email")
                    .table(NewsletterLogs::Table)
                    .col(NewsletterLogs::UserEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsletterLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    HashedPassword,
}

#[derive(DeriveIden)]
enum NewsletterLogs {
    Table,
    Id,
    UserEmail,
    SentAt,
    Status,
}
