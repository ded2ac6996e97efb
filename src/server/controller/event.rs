use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Event;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        event::{EventDto, EventPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// The division must exist and be active and `starts_at` must be before `ends_at`.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventPayload,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 409, description = "Duplicate event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    let event = CrudService::<Event>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// Get paginated events, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedDto<EventDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Event>::new(&state.db)
        .get_paginated::<EventDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an event by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = CrudService::<Event>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Update an event.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted event.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = EventPayload,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Duplicate event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    let event = CrudService::<Event>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Delete an event logically (default) or permanently.
///
/// Permanent deletion also removes the event's sessions and their attendances.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Event>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
