use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::RoleFormPermission;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        role_form_permission::{RoleFormPermissionDto, RoleFormPermissionPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping grant endpoints in OpenAPI documentation
pub static ROLE_FORM_PERMISSION_TAG: &str = "role_form_permission";

/// Create a grant.
///
/// Role, form and permission must exist and be active; each triple is granted at most once.
#[utoipa::path(
    post,
    path = "/api/role-form-permissions",
    tag = ROLE_FORM_PERMISSION_TAG,
    request_body = RoleFormPermissionPayload,
    responses(
        (status = 201, description = "Successfully created grant", body = RoleFormPermissionDto),
        (status = 400, description = "Invalid grant data", body = ErrorDto),
        (status = 409, description = "Duplicate grant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role_form_permission(
    State(state): State<AppState>,
    Json(payload): Json<RoleFormPermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let role_form_permission = CrudService::<RoleFormPermission>::new(&state.db)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(RoleFormPermissionDto::from(role_form_permission))))
}

/// Get paginated grants, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/role-form-permissions",
    tag = ROLE_FORM_PERMISSION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved grants", body = PaginatedDto<RoleFormPermissionDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_form_permissions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<RoleFormPermission>::new(&state.db)
        .get_paginated::<RoleFormPermissionDto>(
            params.page,
            params.entries,
            params.include_inactive,
        )
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a grant by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/role-form-permissions/{id}",
    tag = ROLE_FORM_PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Grant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved grant", body = RoleFormPermissionDto),
        (status = 404, description = "Grant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_form_permission_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role_form_permission = CrudService::<RoleFormPermission>::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(RoleFormPermissionDto::from(role_form_permission))))
}

/// Update a grant.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted grant.
#[utoipa::path(
    put,
    path = "/api/role-form-permissions/{id}",
    tag = ROLE_FORM_PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Grant ID")
    ),
    request_body = RoleFormPermissionPayload,
    responses(
        (status = 200, description = "Successfully updated grant", body = RoleFormPermissionDto),
        (status = 400, description = "Invalid grant data", body = ErrorDto),
        (status = 404, description = "Grant not found", body = ErrorDto),
        (status = 409, description = "Duplicate grant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role_form_permission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RoleFormPermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let role_form_permission = CrudService::<RoleFormPermission>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(RoleFormPermissionDto::from(role_form_permission))))
}

/// Delete a grant logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/role-form-permissions/{id}",
    tag = ROLE_FORM_PERMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Grant ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted grant"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Grant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role_form_permission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<RoleFormPermission>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
