use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Form;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        form::{FormDto, FormPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping form endpoints in OpenAPI documentation
pub static FORM_TAG: &str = "form";

/// Create a form.
///
/// Routes must start with '/'.
#[utoipa::path(
    post,
    path = "/api/forms",
    tag = FORM_TAG,
    request_body = FormPayload,
    responses(
        (status = 201, description = "Successfully created form", body = FormDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 409, description = "Duplicate form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_form(
    State(state): State<AppState>,
    Json(payload): Json<FormPayload>,
) -> Result<impl IntoResponse, AppError> {
    let form = CrudService::<Form>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(FormDto::from(form))))
}

/// Get paginated forms, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/forms",
    tag = FORM_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved forms", body = PaginatedDto<FormDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forms(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Form>::new(&state.db)
        .get_paginated::<FormDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a form by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    tag = FORM_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved form", body = FormDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let form = CrudService::<Form>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(FormDto::from(form))))
}

/// Update a form.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted form.
#[utoipa::path(
    put,
    path = "/api/forms/{id}",
    tag = FORM_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    request_body = FormPayload,
    responses(
        (status = 200, description = "Successfully updated form", body = FormDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 409, description = "Duplicate form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FormPayload>,
) -> Result<impl IntoResponse, AppError> {
    let form = CrudService::<Form>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(FormDto::from(form))))
}

/// Delete a form logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/forms/{id}",
    tag = FORM_TAG,
    params(
        ("id" = i32, Path, description = "Form ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted form"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Form>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
