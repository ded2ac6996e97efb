use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Person;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        person::{PersonDto, PersonPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PERSON_TAG: &str = "person";

/// Create a person.
///
/// Document numbers are unique; the email, when present, must contain '@'.
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = PersonPayload,
    responses(
        (status = 201, description = "Successfully created person", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 409, description = "Duplicate person", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> Result<impl IntoResponse, AppError> {
    let person = CrudService::<Person>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(PersonDto::from(person))))
}

/// Get paginated persons, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSON_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved persons", body = PaginatedDto<PersonDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_persons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Person>::new(&state.db)
        .get_paginated::<PersonDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a person by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let person = CrudService::<Person>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}

/// Update a person.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted person.
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = PersonPayload,
    responses(
        (status = 200, description = "Successfully updated person", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 409, description = "Duplicate person", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PersonPayload>,
) -> Result<impl IntoResponse, AppError> {
    let person = CrudService::<Person>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}

/// Delete a person logically (default) or permanently.
///
/// Permanent deletion also removes the person's user accounts and cards.
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted person"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Person>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
