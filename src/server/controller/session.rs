use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        session::{SessionDto, SessionPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Create a session.
///
/// The event must exist and be active and the session must lie inside the event's time window.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Session data
///
/// # Returns
/// - `201 Created` - Successfully created session
/// - `400 Bad Request` - Invalid session data
/// - `409 Conflict` - Duplicate session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body = SessionPayload,
    responses(
        (status = 201, description = "Successfully created session", body = SessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 409, description = "Duplicate session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let session = CrudService::<Session>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(SessionDto::from(session))))
}

/// Get paginated sessions, ordered by ID.
///
/// Logically deleted sessions are only listed with `include_inactive=true`.
///
/// # Returns
/// - `200 OK` - Page of sessions
/// - `400 Bad Request` - `entries` outside 1..=100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = SESSION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved sessions", body = PaginatedDto<SessionDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sessions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Session>::new(&state.db)
        .get_paginated::<SessionDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a session by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    tag = SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved session", body = SessionDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let session = CrudService::<Session>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(SessionDto::from(session))))
}

/// Update a session.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted session.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}",
    tag = SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    request_body = SessionPayload,
    responses(
        (status = 200, description = "Successfully updated session", body = SessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Duplicate session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let session = CrudService::<Session>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SessionDto::from(session))))
}

/// Delete a session logically (default) or permanently.
///
/// # Returns
/// - `204 No Content` - Session deleted
/// - `400 Bad Request` - Unknown delete type
/// - `404 Not Found` - Session not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    tag = SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Session ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted session"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Session>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
