use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::FormModule;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        form_module::{FormModuleDto, FormModulePayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping form module endpoints in OpenAPI documentation
pub static FORM_MODULE_TAG: &str = "form_module";

/// Create a form module.
///
/// Both the form and the module must exist and be active; a form joins each module at most once.
#[utoipa::path(
    post,
    path = "/api/form-modules",
    tag = FORM_MODULE_TAG,
    request_body = FormModulePayload,
    responses(
        (status = 201, description = "Successfully created form module", body = FormModuleDto),
        (status = 400, description = "Invalid form module data", body = ErrorDto),
        (status = 409, description = "Duplicate form module", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_form_module(
    State(state): State<AppState>,
    Json(payload): Json<FormModulePayload>,
) -> Result<impl IntoResponse, AppError> {
    let form_module = CrudService::<FormModule>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(FormModuleDto::from(form_module))))
}

/// Get paginated form modules, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/form-modules",
    tag = FORM_MODULE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved form modules", body = PaginatedDto<FormModuleDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_modules(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<FormModule>::new(&state.db)
        .get_paginated::<FormModuleDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a form module by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/form-modules/{id}",
    tag = FORM_MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Form module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved form module", body = FormModuleDto),
        (status = 404, description = "Form module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_module_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let form_module = CrudService::<FormModule>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(FormModuleDto::from(form_module))))
}

/// Update a form module.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted form module.
#[utoipa::path(
    put,
    path = "/api/form-modules/{id}",
    tag = FORM_MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Form module ID")
    ),
    request_body = FormModulePayload,
    responses(
        (status = 200, description = "Successfully updated form module", body = FormModuleDto),
        (status = 400, description = "Invalid form module data", body = ErrorDto),
        (status = 404, description = "Form module not found", body = ErrorDto),
        (status = 409, description = "Duplicate form module", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FormModulePayload>,
) -> Result<impl IntoResponse, AppError> {
    let form_module = CrudService::<FormModule>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(FormModuleDto::from(form_module))))
}

/// Delete a form module logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/form-modules/{id}",
    tag = FORM_MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Form module ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted form module"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Form module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<FormModule>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
