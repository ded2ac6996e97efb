use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Division;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        division::{DivisionDto, DivisionPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping division endpoints in OpenAPI documentation
pub static DIVISION_TAG: &str = "division";

/// Create a division.
///
/// The parent branch must exist and be active.
#[utoipa::path(
    post,
    path = "/api/divisions",
    tag = DIVISION_TAG,
    request_body = DivisionPayload,
    responses(
        (status = 201, description = "Successfully created division", body = DivisionDto),
        (status = 400, description = "Invalid division data", body = ErrorDto),
        (status = 409, description = "Duplicate division", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_division(
    State(state): State<AppState>,
    Json(payload): Json<DivisionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let division = CrudService::<Division>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DivisionDto::from(division))))
}

/// Get paginated divisions, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/divisions",
    tag = DIVISION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved divisions", body = PaginatedDto<DivisionDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_divisions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Division>::new(&state.db)
        .get_paginated::<DivisionDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a division by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = i32, Path, description = "Division ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved division", body = DivisionDto),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_division_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let division = CrudService::<Division>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DivisionDto::from(division))))
}

/// Update a division.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted division.
#[utoipa::path(
    put,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = i32, Path, description = "Division ID")
    ),
    request_body = DivisionPayload,
    responses(
        (status = 200, description = "Successfully updated division", body = DivisionDto),
        (status = 400, description = "Invalid division data", body = ErrorDto),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 409, description = "Duplicate division", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_division(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DivisionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let division = CrudService::<Division>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(DivisionDto::from(division))))
}

/// Delete a division logically (default) or permanently.
///
/// Permanent deletion also removes the division's events and access points.
#[utoipa::path(
    delete,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = i32, Path, description = "Division ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted division"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_division(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Division>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
