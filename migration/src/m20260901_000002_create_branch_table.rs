use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::Id))
                    .col(integer(Branch::OrganizationId))
                    .col(string(Branch::Name))
                    .col(string_null(Branch::Address))
                    .col(boolean(Branch::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_organization_id")
                            .from(Branch::Table, Branch::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    Table,
    Id,
    OrganizationId,
    Name,
    Address,
    Active,
}
