use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::UserRole;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        user_role::{UserRoleDto, UserRolePayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping user role endpoints in OpenAPI documentation
pub static USER_ROLE_TAG: &str = "user_role";

/// Create a user role.
///
/// Both the user and the role must exist and be active; a user holds each role at most once.
#[utoipa::path(
    post,
    path = "/api/user-roles",
    tag = USER_ROLE_TAG,
    request_body = UserRolePayload,
    responses(
        (status = 201, description = "Successfully created user role", body = UserRoleDto),
        (status = 400, description = "Invalid user role data", body = ErrorDto),
        (status = 409, description = "Duplicate user role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_role(
    State(state): State<AppState>,
    Json(payload): Json<UserRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let user_role = CrudService::<UserRole>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(UserRoleDto::from(user_role))))
}

/// Get paginated user roles, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/user-roles",
    tag = USER_ROLE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved user roles", body = PaginatedDto<UserRoleDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_roles(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<UserRole>::new(&state.db)
        .get_paginated::<UserRoleDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a user role by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/user-roles/{id}",
    tag = USER_ROLE_TAG,
    params(
        ("id" = i32, Path, description = "User role ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user role", body = UserRoleDto),
        (status = 404, description = "User role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_role_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user_role = CrudService::<UserRole>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(UserRoleDto::from(user_role))))
}

/// Update a user role.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted user role.
#[utoipa::path(
    put,
    path = "/api/user-roles/{id}",
    tag = USER_ROLE_TAG,
    params(
        ("id" = i32, Path, description = "User role ID")
    ),
    request_body = UserRolePayload,
    responses(
        (status = 200, description = "Successfully updated user role", body = UserRoleDto),
        (status = 400, description = "Invalid user role data", body = ErrorDto),
        (status = 404, description = "User role not found", body = ErrorDto),
        (status = 409, description = "Duplicate user role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let user_role = CrudService::<UserRole>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(UserRoleDto::from(user_role))))
}

/// Delete a user role logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/user-roles/{id}",
    tag = USER_ROLE_TAG,
    params(
        ("id" = i32, Path, description = "User role ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted user role"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "User role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<UserRole>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
