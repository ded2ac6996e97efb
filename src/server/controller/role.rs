use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Role;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        role::{RoleDto, RolePayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Create a role.
///
/// Role names are unique.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Role data
///
/// # Returns
/// - `201 Created` - Successfully created role
/// - `400 Bad Request` - Invalid role data
/// - `409 Conflict` - Duplicate role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = RolePayload,
    responses(
        (status = 201, description = "Successfully created role", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 409, description = "Duplicate role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<RolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let role = CrudService::<Role>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(RoleDto::from(role))))
}

/// Get paginated roles, ordered by ID.
///
/// Logically deleted roles are only listed with `include_inactive=true`.
///
/// # Returns
/// - `200 OK` - Page of roles
/// - `400 Bad Request` - `entries` outside 1..=100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved roles", body = PaginatedDto<RoleDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Role>::new(&state.db)
        .get_paginated::<RoleDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a role by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved role", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role = CrudService::<Role>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(RoleDto::from(role))))
}

/// Update a role.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted role.
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    request_body = RolePayload,
    responses(
        (status = 200, description = "Successfully updated role", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Duplicate role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let role = CrudService::<Role>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(RoleDto::from(role))))
}

/// Delete a role logically (default) or permanently.
///
/// Permanent deletion also removes the role's user assignments and grants. A logical delete
/// keeps them but they stop granting access.
///
/// # Returns
/// - `204 No Content` - Role deleted
/// - `400 Bad Request` - Unknown delete type
/// - `404 Not Found` - Role not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Role ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted role"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Role>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
