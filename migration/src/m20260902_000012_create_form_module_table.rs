use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000009_create_form_table::Form;
use super::m20260901_000008_create_module_table::Module;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormModule::Table)
                    .if_not_exists()
                    .col(pk_auto(FormModule::Id))
                    .col(integer(FormModule::FormId))
                    .col(integer(FormModule::ModuleId))
                    .col(boolean(FormModule::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_module_form_id")
                            .from(FormModule::Table, FormModule::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_module_module_id")
                            .from(FormModule::Table, FormModule::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_module_form_id_module_id")
                    .table(FormModule::Table)
                    .col(FormModule::FormId)
                    .col(FormModule::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormModule {
    Table,
    Id,
    FormId,
    ModuleId,
    Active,
}
