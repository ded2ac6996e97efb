use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Organization;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        organization::{OrganizationDto, OrganizationPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

/// Create an organization.
///
/// Organization names are unique.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Organization data
///
/// # Returns
/// - `201 Created` - Successfully created organization
/// - `400 Bad Request` - Invalid organization data
/// - `409 Conflict` - Duplicate organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    request_body = OrganizationPayload,
    responses(
        (status = 201, description = "Successfully created organization", body = OrganizationDto),
        (status = 400, description = "Invalid organization data", body = ErrorDto),
        (status = 409, description = "Duplicate organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    Json(payload): Json<OrganizationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let organization = CrudService::<Organization>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(OrganizationDto::from(organization))))
}

/// Get paginated organizations, ordered by ID.
///
/// Logically deleted organizations are only listed with `include_inactive=true`.
///
/// # Returns
/// - `200 OK` - Page of organizations
/// - `400 Bad Request` - `entries` outside 1..=100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved organizations", body = PaginatedDto<OrganizationDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organizations(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Organization>::new(&state.db)
        .get_paginated::<OrganizationDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an organization by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = i32, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved organization", body = OrganizationDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let organization = CrudService::<Organization>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(OrganizationDto::from(organization))))
}

/// Update an organization.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted organization.
#[utoipa::path(
    put,
    path = "/api/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = i32, Path, description = "Organization ID")
    ),
    request_body = OrganizationPayload,
    responses(
        (status = 200, description = "Successfully updated organization", body = OrganizationDto),
        (status = 400, description = "Invalid organization data", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 409, description = "Duplicate organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_organization(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OrganizationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let organization = CrudService::<Organization>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(OrganizationDto::from(organization))))
}

/// Delete an organization logically (default) or permanently.
///
/// Permanent deletion also removes the organization's branches and everything below them.
///
/// # Returns
/// - `204 No Content` - Organization deleted
/// - `400 Bad Request` - Unknown delete type
/// - `404 Not Found` - Organization not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(
        ("id" = i32, Path, description = "Organization ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted organization"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Organization>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
