use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000006_create_role_table::Role;
use super::m20260901_000009_create_form_table::Form;
use super::m20260901_000007_create_permission_table::Permission;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleFormPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleFormPermission::Id))
                    .col(integer(RoleFormPermission::RoleId))
                    .col(integer(RoleFormPermission::FormId))
                    .col(integer(RoleFormPermission::PermissionId))
                    .col(boolean(RoleFormPermission::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_form_permission_role_id")
                            .from(RoleFormPermission::Table, RoleFormPermission::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_form_permission_form_id")
                            .from(RoleFormPermission::Table, RoleFormPermission::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_form_permission_permission_id")
                            .from(RoleFormPermission::Table, RoleFormPermission::PermissionId)
                            .to(Permission::Table, Permission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_role_form_permission_role_id_form_id_permission_id")
                    .table(RoleFormPermission::Table)
                    .col(RoleFormPermission::RoleId)
                    .col(RoleFormPermission::FormId)
                    .col(RoleFormPermission::PermissionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleFormPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleFormPermission {
    Table,
    Id,
    RoleId,
    FormId,
    PermissionId,
    Active,
}
