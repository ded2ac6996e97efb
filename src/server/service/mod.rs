//! Business logic layer.
//!
//! [`crud::CrudService`] runs the create/read/update/delete flow for any entity. The
//! entity-specific rules (required fields, referenced parents, uniqueness) are supplied by
//! each payload type through [`EntityPayload`], implemented in the per-entity modules.
//! Operations spanning several tables have dedicated services.

pub mod access_point;
pub mod attendance;
pub mod authorization;
pub mod branch;
pub mod card;
pub mod crud;
pub mod division;
pub mod event;
pub mod form;
pub mod form_module;
pub mod module;
pub mod organization;
pub mod permission;
pub mod person;
pub mod role;
pub mod role_form_permission;
pub mod session;
pub mod user;
pub mod user_role;
pub mod validation;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{data::Record, error::AppError};

/// Create/update request body for entity `E`.
#[async_trait]
pub trait EntityPayload<E: Record>: Send + Sync {
    /// Checks field contents and cross-entity constraints before a write.
    ///
    /// `id` is the record being updated, `None` when creating.
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError>;

    /// Copies the payload's fields onto the active model.
    fn apply(self, model: &mut E::ActiveModel);
}

#[cfg(test)]
mod test;
