use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Card;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        card::{CardDto, CardPayload},
    },
    server::{
        controller::{DeleteParams, PaginationParams},
        error::AppError,
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Create a card.
///
/// The person must exist and be active. Codes are unique and `expires_at` must be after
/// `issued_at`.
#[utoipa::path(
    post,
    path = "/api/cards",
    tag = CARD_TAG,
    request_body = CardPayload,
    responses(
        (status = 201, description = "Successfully created card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 409, description = "Duplicate card", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    Json(payload): Json<CardPayload>,
) -> Result<impl IntoResponse, AppError> {
    let card = CrudService::<Card>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(CardDto::from(card))))
}

/// Get paginated cards, ordered by ID.
#[utoipa::path(
    get,
    path = "/api/cards",
    tag = CARD_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved cards", body = PaginatedDto<CardDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CrudService::<Card>::new(&state.db)
        .get_paginated::<CardDto>(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a card by ID, including logically deleted ones.
#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved card", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let card = CrudService::<Card>::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(CardDto::from(card))))
}

/// Update a card.
///
/// Replaces every writable field; send `active: true` to restore a logically deleted card.
#[utoipa::path(
    put,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    request_body = CardPayload,
    responses(
        (status = 200, description = "Successfully updated card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 409, description = "Duplicate card", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CardPayload>,
) -> Result<impl IntoResponse, AppError> {
    let card = CrudService::<Card>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(CardDto::from(card))))
}

/// Delete a card logically (default) or permanently.
#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Successfully deleted card"),
        (status = 400, description = "Unknown delete type", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::<Card>::new(&state.db)
        .delete(id, params.delete_type)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
