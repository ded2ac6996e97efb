use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000013_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id))
                    .col(integer(Session::EventId))
                    .col(string(Session::Name))
                    .col(timestamp_with_time_zone(Session::StartsAt))
                    .col(timestamp_with_time_zone(Session::EndsAt))
                    .col(boolean(Session::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_event_id")
                            .from(Session::Table, Session::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    EventId,
    Name,
    StartsAt,
    EndsAt,
    Active,
}
