use std::marker::PhantomData;

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, IntoActiveModel};

use crate::{
    model::api::{DeleteType, PaginatedDto},
    server::{
        data::{Record, Repository},
        error::AppError,
        service::EntityPayload,
    },
};

/// Largest page size a listing accepts.
pub const MAX_PER_PAGE: u64 = 100;

/// Service running the CRUD flow for any [`Record`] entity.
///
/// Validation is delegated to the payload, persistence to [`Repository`]. Every write is
/// logged; missing records become `AppError::NotFound`.
pub struct CrudService<'a, E> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E> CrudService<'a, E>
where
    E: Record,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Default + Send,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Validates the payload and inserts a new record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created record
    /// - `Err(AppError::BadRequest)` - Invalid field or missing/inactive referenced record
    /// - `Err(AppError::Conflict)` - Unique value already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create<P: EntityPayload<E>>(&self, payload: P) -> Result<E::Model, AppError> {
        payload.validate(self.db, None).await?;

        let mut model = <E::ActiveModel as Default>::default();
        payload.apply(&mut model);

        let created = Repository::<E>::new(self.db).create(model).await?;

        tracing::info!("Created {} {}", E::LABEL, E::id_of(&created));

        Ok(created)
    }

    /// Gets a record by ID, active or not.
    pub async fn get_by_id(&self, id: i32) -> Result<E::Model, AppError> {
        tracing::debug!("Fetching {} {}", E::LABEL, id);

        Repository::<E>::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Gets one page of records converted to DTOs.
    ///
    /// # Returns
    /// - `Ok(PaginatedDto)` - Records of the page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` outside `1..=MAX_PER_PAGE`, or a page
    ///   whose offset does not fit the database's signed 64-bit range
    pub async fn get_paginated<D: From<E::Model>>(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<PaginatedDto<D>, AppError> {
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(AppError::BadRequest(format!(
                "Entries per page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        if page
            .checked_mul(per_page)
            .is_none_or(|offset| offset > i64::MAX as u64)
        {
            return Err(AppError::BadRequest(format!("Page {} is out of range", page)));
        }

        let (records, total) = Repository::<E>::new(self.db)
            .get_paginated(page, per_page, include_inactive)
            .await?;

        Ok(PaginatedDto::new(
            records.into_iter().map(D::from).collect(),
            total,
            page,
            per_page,
        ))
    }

    /// Validates the payload and overwrites the writable columns of an existing record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated record
    /// - `Err(AppError::NotFound)` - No record with that ID
    /// - `Err(AppError::BadRequest)` / `Err(AppError::Conflict)` - Payload rejected
    pub async fn update<P: EntityPayload<E>>(
        &self,
        id: i32,
        payload: P,
    ) -> Result<E::Model, AppError> {
        let repo = Repository::<E>::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Err(not_found::<E>(id));
        };

        payload.validate(self.db, Some(id)).await?;

        let mut model = existing.into_active_model();
        payload.apply(&mut model);

        let updated = repo.update(model).await?;

        tracing::info!("Updated {} {}", E::LABEL, id);

        Ok(updated)
    }

    /// Deletes a record with the requested strategy.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted
    /// - `Err(AppError::NotFound)` - No record with that ID
    pub async fn delete(&self, id: i32, delete_type: DeleteType) -> Result<(), AppError> {
        let deleted = Repository::<E>::new(self.db)
            .delete(id, delete_type)
            .await?;

        if !deleted {
            return Err(not_found::<E>(id));
        }

        tracing::info!("Deleted {} {} ({})", E::LABEL, id, delete_type);

        Ok(())
    }
}

pub(crate) fn not_found<E: Record>(id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", E::LABEL, id))
}
