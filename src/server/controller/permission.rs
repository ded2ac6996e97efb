use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Permission;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        permission::{PermissionDto, PermissionPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping permission endpoints in OpenAPI documentation
pub static PERMISSION_TAG: &str = "permission";

/// Create a permission.
///
/// Permission names are unique.
#[utoipa::path(
    post,
    path = "/api/permissions",
    tag = PERMISSION_TAG,
    request_body = PermissionPayload,
    responses(
        (status = 201, description = "Successfully created permission", body = PermissionDto),
        (status = 400, description = "Invalid permission data", body = ErrorDto),
        (status = 409, description = "Duplicate permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_permission(
    State(state): State<AppState>,
    Json(payload): Json<PermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let permission = CrudService::<Permission>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(PermissionDto::from(permission))))
}

/// Get paginated permissions, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/permissions",
    tag = PERMISSION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved permissions", body = PaginatedDto<PermissionDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Permission>::new(&state.db)
        .get_paginated::<PermissionDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a permission by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/permissions/{id}",
    tag = PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Permission ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved permission", body = PermissionDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_permission_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let permission = CrudService::<Permission>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(PermissionDto::from(permission))))
}

/// Update a permission.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted permission.
#[utoipa::path(
    put,
    path = "/api/permissions/{id}",
    tag = PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Permission ID")
    ),
    request_body = PermissionPayload,
    responses(
        (status = 200, description = "Successfully updated permission", body = PermissionDto),
        (status = 400, description = "Invalid permission data", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 409, description = "Duplicate permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_permission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let permission = CrudService::<Permission>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(PermissionDto::from(permission))))
}

/// Delete a permission logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/permissions/{id}",
    tag = PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Permission ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted permission"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Permission>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
