use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_branch_table::Branch;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Division::Table)
                    .if_not_exists()
                    .col(pk_auto(Division::Id))
                    .col(integer(Division::BranchId))
                    .col(string(Division::Name))
                    .col(string_null(Division::Description))
                    .col(boolean(Division::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_division_branch_id")
                            .from(Division::Table, Division::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Division::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Division {
    Table,
    Id,
    BranchId,
    Name,
    Description,
    Active,
}
