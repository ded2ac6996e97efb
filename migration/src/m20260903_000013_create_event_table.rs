use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_division_table::Division;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::DivisionId))
                    .col(string(Event::Name))
                    .col(string_null(Event::Description))
                    .col(timestamp_with_time_zone(Event::StartsAt))
                    .col(timestamp_with_time_zone(Event::EndsAt))
                    .col(boolean(Event::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_division_id")
                            .from(Event::Table, Event::DivisionId)
                            .to(Division::Table, Division::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    DivisionId,
    Name,
    Description,
    StartsAt,
    EndsAt,
    Active,
}
