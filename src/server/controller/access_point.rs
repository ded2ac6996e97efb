use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::AccessPoint;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        access_point::{AccessPointDto, AccessPointPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping access point endpoints in OpenAPI documentation
pub static ACCESS_POINT_TAG: &str = "access_point";

/// Create an access point.
///
/// The division must exist and be active.
#[utoipa::path(
    post,
    path = "/api/access-points",
    tag = ACCESS_POINT_TAG,
    request_body = AccessPointPayload,
    responses(
        (status = 201, description = "Successfully created access point", body = AccessPointDto),
        (status = 400, description = "Invalid access point data", body = ErrorDto),
        (status = 409, description = "Duplicate access point", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_access_point(
    State(state): State<AppState>,
    Json(payload): Json<AccessPointPayload>,
) -> Result<impl IntoResponse, AppError> {
    let access_point = CrudService::<AccessPoint>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(AccessPointDto::from(access_point))))
}

/// Get paginated access points, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/access-points",
    tag = ACCESS_POINT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved access points", body = PaginatedDto<AccessPointDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_access_points(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<AccessPoint>::new(&state.db)
        .get_paginated::<AccessPointDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an access point by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/access-points/{id}",
    tag = ACCESS_POINT_TAG,
    params(
        ("id" = i32, Path, description = "Access point ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved access point", body = AccessPointDto),
        (status = 404, description = "Access point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_access_point_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let access_point = CrudService::<AccessPoint>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(AccessPointDto::from(access_point))))
}

/// Update an access point.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted access point.
#[utoipa::path(
    put,
    path = "/api/access-points/{id}",
    tag = ACCESS_POINT_TAG,
    params(
        ("id" = i32, Path, description = "Access point ID")
    ),
    request_body = AccessPointPayload,
    responses(
        (status = 200, description = "Successfully updated access point", body = AccessPointDto),
        (status = 400, description = "Invalid access point data", body = ErrorDto),
        (status = 404, description = "Access point not found", body = ErrorDto),
        (status = 409, description = "Duplicate access point", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_access_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AccessPointPayload>,
) -> Result<impl IntoResponse, AppError> {
    let access_point = CrudService::<AccessPoint>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(AccessPointDto::from(access_point))))
}

/// Delete an access point logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/access-points/{id}",
    tag = ACCESS_POINT_TAG,
    params(
        ("id" = i32, Path, description = "Access point ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted access point"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Access point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_access_point(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<AccessPoint>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
