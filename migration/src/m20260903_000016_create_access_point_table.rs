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
                    .table(AccessPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessPoint::Id))
                    .col(integer(AccessPoint::DivisionId))
                    .col(string(AccessPoint::Name))
                    .col(string_null(AccessPoint::Location))
                    .col(boolean(AccessPoint::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_point_division_id")
                            .from(AccessPoint::Table, AccessPoint::DivisionId)
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
            .drop_table(Table::drop().table(AccessPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessPoint {
    Table,
    Id,
    DivisionId,
    Name,
    Location,
    Active,
}
