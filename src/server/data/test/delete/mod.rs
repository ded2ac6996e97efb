use crate::{
    model::api::DeleteType,
    server::data::delete::{resolve_strategy, DeleteStrategy, LogicalDelete, PermanentDelete},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod logical;
mod permanent;
mod resolve_strategy;
