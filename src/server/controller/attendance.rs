use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Attendance;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        attendance::{AttendanceDto, AttendancePayload, RegisterAttendanceDto},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::{attendance::AttendanceService, crud::CrudService},
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Create an attendance.
///
/// Card, session and access point must exist and be active; a card is registered at most
/// once per session. Use `/api/attendances/register` to record a swipe at the current time.
#[utoipa::path(
    post,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    request_body = AttendancePayload,
    responses(
        (status = 201, description = "Successfully created attendance", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 409, description = "Duplicate attendance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(payload): Json<AttendancePayload>,
) -> Result<impl IntoResponse, AppError> {
    let attendance = CrudService::<Attendance>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(AttendanceDto::from(attendance))))
}

/// Get paginated attendances, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/attendances",
    tag = ATTENDANCE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved attendances", body = PaginatedDto<AttendanceDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Attendance>::new(&state.db)
        .get_paginated::<AttendanceDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an attendance by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = AttendanceDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attendance = CrudService::<Attendance>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(AttendanceDto::from(attendance))))
}

/// Update an attendance.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted attendance.
#[utoipa::path(
    put,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID")
    ),
    request_body = AttendancePayload,
    responses(
        (status = 200, description = "Successfully updated attendance", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 409, description = "Duplicate attendance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AttendancePayload>,
) -> Result<impl IntoResponse, AppError> {
    let attendance = CrudService::<Attendance>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(AttendanceDto::from(attendance))))
}

/// Delete an attendance logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted attendance"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Attendance>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Register a card swipe at the current time.
///
/// Looks the card up by its code and records its attendance to the session through the
/// access point. The card must be active and unexpired, the session active and currently
/// open, its event active and the access point active inside the event's division.
///
/// # Returns
/// - `201 Created` - Attendance registered
/// - `400 Bad Request` - Card, session, event or access point unusable
/// - `404 Not Found` - Unknown card code, session or access point
/// - `409 Conflict` - Card already registered for the session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/attendances/register",
    tag = ATTENDANCE_TAG,
    request_body = RegisterAttendanceDto,
    responses(
        (status = 201, description = "Successfully registered attendance", body = AttendanceDto),
        (status = 400, description = "Card, session or access point unusable", body = ErrorDto),
        (status = 404, description = "Card, session or access point not found", body = ErrorDto),
        (status = 409, description = "Card already registered for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_attendance(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let attendance = AttendanceService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(AttendanceDto::from(attendance))))
}

/// Get the active attendances of a session ordered by registration time.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/attendances",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendances", body = Vec<AttendanceDto>),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_attendances(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attendances = AttendanceService::new(&state.db).get_by_session(id).await?;

    Ok((
        StatusCode::OK,
        Json(
            attendances
                .into_iter()
                .map(AttendanceDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}
