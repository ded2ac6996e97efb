use crate::{
    model::api::DeleteType,
    server::data::{authorization::AuthorizationRepository, Repository},
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_forms_for_module;
mod get_grants_for_roles;
mod get_modules_for_forms;
mod get_roles_for_user;
