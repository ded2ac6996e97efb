use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Module;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        module::{ModuleDto, ModulePayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping module endpoints in OpenAPI documentation
pub static MODULE_TAG: &str = "module";

/// Create a module.
///
/// Module names are unique.
#[utoipa::path(
    post,
    path = "/api/modules",
    tag = MODULE_TAG,
    request_body = ModulePayload,
    responses(
        (status = 201, description = "Successfully created module", body = ModuleDto),
        (status = 400, description = "Invalid module data", body = ErrorDto),
        (status = 409, description = "Duplicate module", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    Json(payload): Json<ModulePayload>,
) -> Result<impl IntoResponse, AppError> {
    let module = CrudService::<Module>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(ModuleDto::from(module))))
}

/// Get paginated modules, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/modules",
    tag = MODULE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved modules", body = PaginatedDto<ModuleDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_modules(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Module>::new(&state.db)
        .get_paginated::<ModuleDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a module by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved module", body = ModuleDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_module_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let module = CrudService::<Module>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ModuleDto::from(module))))
}

/// Update a module.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted module.
#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    request_body = ModulePayload,
    responses(
        (status = 200, description = "Successfully updated module", body = ModuleDto),
        (status = 400, description = "Invalid module data", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 409, description = "Duplicate module", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ModulePayload>,
) -> Result<impl IntoResponse, AppError> {
    let module = CrudService::<Module>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(ModuleDto::from(module))))
}

/// Delete a module logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted module"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Module>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
