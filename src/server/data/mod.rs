//! Database repository layer for all domain entities.
//!
//! Every table shares the same shape (`id` primary key plus `active` flag), so the CRUD
//! operations live in one generic [`Repository`] parameterised by a [`Record`] entity.
//! Queries that span several tables (authorization resolution, attendance lookups) have
//! their own repositories.

pub mod attendance;
pub mod authorization;
pub mod delete;

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::api::DeleteType,
    server::data::delete::resolve_strategy,
};

/// An entity with an integer `id` primary key and an `active` flag.
///
/// Implemented for every table of the schema; this is what lets the repository and the
/// delete strategies stay generic.
pub trait Record: EntityTrait {
    /// Human-readable entity name used in log lines and error messages.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;

    fn active_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;

    fn is_active(model: &Self::Model) -> bool;
}

macro_rules! impl_record {
    ($($module:ident => $label:literal),+ $(,)?) => {
        $(
            impl Record for entity::$module::Entity {
                const LABEL: &'static str = $label;

                fn id_column() -> Self::Column {
                    entity::$module::Column::Id
                }

                fn active_column() -> Self::Column {
                    entity::$module::Column::Active
                }

                fn id_of(model: &Self::Model) -> i32 {
                    model.id
                }

                fn is_active(model: &Self::Model) -> bool {
                    model.active
                }
            }
        )+
    };
}

impl_record! {
    access_point => "Access point",
    attendance => "Attendance",
    branch => "Branch",
    card => "Card",
    division => "Division",
    event => "Event",
    form => "Form",
    form_module => "Form module",
    module => "Module",
    organization => "Organization",
    permission => "Permission",
    person => "Person",
    role => "Role",
    role_form_permission => "Role form permission",
    session => "Session",
    user => "User",
    user_role => "User role",
}

/// Repository providing CRUD operations for any [`Record`] entity.
pub struct Repository<'a, E> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E> Repository<'a, E>
where
    E: Record,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Inserts a new record and returns it with its generated ID.
    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        E::insert(model).exec_with_returning(self.db).await
    }

    /// Gets a record by ID regardless of its `active` flag.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await
    }

    /// Gets one page of records ordered by ID.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of records per page, must be non-zero
    /// - `include_inactive` - Whether logically deleted records are listed
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records of the page and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let mut query = E::find();
        if !include_inactive {
            query = query.filter(E::active_column().eq(true));
        }

        let paginator = query
            .order_by_asc(E::id_column())
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let records = paginator.fetch_page(page).await?;

        Ok((records, total))
    }

    /// Writes the changed columns of an active model loaded from an existing record.
    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        E::update(model).exec(self.db).await
    }

    /// Deletes a record with the strategy selected by `delete_type`.
    ///
    /// # Returns
    /// - `Ok(true)` - Record existed and was deleted
    /// - `Ok(false)` - No record with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, delete_type: DeleteType) -> Result<bool, DbErr> {
        resolve_strategy::<E>(delete_type).delete(self.db, id).await
    }
}

#[cfg(test)]
mod test;
