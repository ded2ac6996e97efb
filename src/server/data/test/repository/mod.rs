use crate::{model::api::DeleteType, server::data::Repository};
use entity::prelude::*;
use sea_orm::{ActiveValue, DbErr, EntityTrait, IntoActiveModel};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;
