use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Branch;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        branch::{BranchDto, BranchPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping branch endpoints in OpenAPI documentation
pub static BRANCH_TAG: &str = "branch";

/// Create a branch.
///
/// The parent organization must exist and be active.
#[utoipa::path(
    post,
    path = "/api/branches",
    tag = BRANCH_TAG,
    request_body = BranchPayload,
    responses(
        (status = 201, description = "Successfully created branch", body = BranchDto),
        (status = 400, description = "Invalid branch data", body = ErrorDto),
        (status = 409, description = "Duplicate branch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_branch(
    State(state): State<AppState>,
    Json(payload): Json<BranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    let branch = CrudService::<Branch>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(BranchDto::from(branch))))
}

/// Get paginated branches, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/branches",
    tag = BRANCH_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved branches", body = PaginatedDto<BranchDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_branches(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Branch>::new(&state.db)
        .get_paginated::<BranchDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a branch by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(
        ("id" = i32, Path, description = "Branch ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved branch", body = BranchDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_branch_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let branch = CrudService::<Branch>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(BranchDto::from(branch))))
}

/// Update a branch.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted branch.
#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(
        ("id" = i32, Path, description = "Branch ID")
    ),
    request_body = BranchPayload,
    responses(
        (status = 200, description = "Successfully updated branch", body = BranchDto),
        (status = 400, description = "Invalid branch data", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 409, description = "Duplicate branch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    let branch = CrudService::<Branch>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(BranchDto::from(branch))))
}

/// Delete a branch logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(
        ("id" = i32, Path, description = "Branch ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted branch"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Branch>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
