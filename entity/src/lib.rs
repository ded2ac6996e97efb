//! SeaORM entities for the RBAC administration schema.
//!
//! Every table carries an auto-increment `id` primary key and an `active` flag used by
//! logical deletion. Foreign keys cascade on delete and update.

pub mod prelude;

pub mod access_point;
pub mod attendance;
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
