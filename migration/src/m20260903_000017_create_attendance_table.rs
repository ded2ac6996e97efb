use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000015_create_card_table::Card;
use super::m20260903_000014_create_session_table::Session;
use super::m20260903_000016_create_access_point_table::AccessPoint;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::CardId))
                    .col(integer(Attendance::SessionId))
                    .col(integer(Attendance::AccessPointId))
                    .col(timestamp_with_time_zone(Attendance::RegisteredAt))
                    .col(boolean(Attendance::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_card_id")
                            .from(Attendance::Table, Attendance::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_session_id")
                            .from(Attendance::Table, Attendance::SessionId)
                            .to(Session::Table, Session::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_access_point_id")
                            .from(Attendance::Table, Attendance::AccessPointId)
                            .to(AccessPoint::Table, AccessPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_card_id_session_id")
                    .table(Attendance::Table)
                    .col(Attendance::CardId)
                    .col(Attendance::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    CardId,
    SessionId,
    AccessPointId,
    RegisteredAt,
    Active,
}
