use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Public calendar: dated events, named holidays and the weekly opening hours.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(date(Events::Date))
                    .col(string(Events::Title))
                    .col(text_null(Events::Description))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_events_date")
                    .table(Events::Table)
                    .col(Events::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Holidays::Table)
                    .if_not_exists()
                    .col(pk_auto(Holidays::Id))
                    .col(string(Holidays::Name))
                    .col(date(Holidays::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OperatingHours::Table)
                    .if_not_exists()
                    .col(pk_auto(OperatingHours::Id))
                    .col(string_uniq(OperatingHours::Day))
                    .col(string(OperatingHours::Hours))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OperatingHours::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Holidays::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Date,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum Holidays {
    Table,
    Id,
    Name,
    Date,
}

#[derive(DeriveIden)]
enum OperatingHours {
    Table,
    Id,
    Day,
    Hours,
}
