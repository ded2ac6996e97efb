//! Request and response DTOs exchanged over the HTTP API.
//!
//! Each entity has a response DTO (`*Dto`) and a payload type (`*Payload`) shared by its
//! create and update endpoints. Conversions from SeaORM models live beside the DTOs.

pub mod access_point;
pub mod api;
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
