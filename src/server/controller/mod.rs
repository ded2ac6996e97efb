//! HTTP request handlers.
//!
//! Every entity has a controller module exposing create, list, get, update and delete
//! handlers documented with `utoipa`. Handlers only extract request data, call a service
//! and convert the result to DTOs; validation and error mapping live below them.

pub mod access_point;
pub mod attendance;
pub mod authorization;
pub mod branch;
pub mod card;
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

use serde::Deserialize;
use utoipa::IntoParams;

use crate::model::api::DeleteType;

/// Query parameters of list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page, between 1 and 100 (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Also list logically deleted records (default: false)
    #[serde(default)]
    pub include_inactive: bool,
}

fn default_entries() -> u64 {
    10
}

/// Query parameters of delete endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParams {
    /// `logical` flags the record inactive, `permanent` removes it (default: logical)
    #[serde(default)]
    pub delete_type: DeleteType,
}

#[cfg(test)]
mod test;
