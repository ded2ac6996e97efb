//! Deletion strategies.
//!
//! A delete request names a [`DeleteType`]; [`resolve_strategy`] maps it to exactly one
//! [`DeleteStrategy`] implementation which then runs against the target entity. Both
//! strategies load the record first and report `false` when it does not exist.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::{model::api::DeleteType, server::data::Record};

/// Removes one record of entity `E` by ID.
#[async_trait]
pub trait DeleteStrategy<E: Record>: Send + Sync {
    /// # Returns
    /// - `Ok(true)` - Record existed and was deleted
    /// - `Ok(false)` - No record with that ID
    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<bool, DbErr>;
}

/// Flags the record inactive and keeps the row.
pub struct LogicalDelete;

/// Removes the row.
pub struct PermanentDelete;

#[async_trait]
impl<E: Record> DeleteStrategy<E> for LogicalDelete {
    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        if find::<E>(db, id).await?.is_none() {
            return Ok(false);
        }

        E::update_many()
            .col_expr(E::active_column(), Expr::value(false))
            .filter(E::id_column().eq(id))
            .exec(db)
            .await?;

        Ok(true)
    }
}

#[async_trait]
impl<E: Record> DeleteStrategy<E> for PermanentDelete {
    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        if find::<E>(db, id).await?.is_none() {
            return Ok(false);
        }

        E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(db)
            .await?;

        Ok(true)
    }
}

async fn find<E: Record>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, DbErr> {
    E::find().filter(E::id_column().eq(id)).one(db).await
}

/// Selects the strategy implementing `delete_type` for entity `E`.
pub fn resolve_strategy<E: Record>(delete_type: DeleteType) -> Box<dyn DeleteStrategy<E>> {
    match delete_type {
        DeleteType::Logical => Box::new(LogicalDelete),
        DeleteType::Permanent => Box::new(PermanentDelete),
    }
}
