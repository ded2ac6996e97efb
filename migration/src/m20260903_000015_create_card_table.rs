use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000004_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(integer(Card::PersonId))
                    .col(string_uniq(Card::Code))
                    .col(timestamp_with_time_zone(Card::IssuedAt))
                    .col(timestamp_with_time_zone_null(Card::ExpiresAt))
                    .col(boolean(Card::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_person_id")
                            .from(Card::Table, Card::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    PersonId,
    Code,
    IssuedAt,
    ExpiresAt,
    Active,
}
