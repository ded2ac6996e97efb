//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for
/// automatic conversion, while the message variants carry client-facing text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign key violations surface as 409 Conflict, everything else as
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, e.g. failure to bind the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data (duplicate name, association already present).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and constraint-violating `DbErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::Conflict(msg) => {
                tracing::warn!("Conflicting request: {}", msg);
                error_response(StatusCode::CONFLICT, msg)
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::warn!("Unique constraint violation: {}", detail);
                    error_response(
                        StatusCode::CONFLICT,
                        "A record with the same unique values already exists".to_string(),
                    )
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::warn!("Foreign key constraint violation: {}", detail);
                    error_response(
                        StatusCode::CONFLICT,
                        "The request references a record that does not exist".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use entity::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a unique violation raised by the database itself becomes a conflict.
    ///
    /// Expected: 409 Conflict
    #[tokio::test]
    async fn unique_violation_maps_to_conflict() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Role).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_role_with_name(db, "Admin").await?;
        let err = factory::create_role_with_name(db, "Admin")
            .await
            .expect_err("duplicate role name must be rejected");

        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Tests that a foreign key violation raised by the database itself becomes a conflict.
    ///
    /// Expected: 409 Conflict
    #[tokio::test]
    async fn foreign_key_violation_maps_to_conflict() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_security_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let err = entity::user::ActiveModel {
            person_id: ActiveValue::Set(999),
            username: ActiveValue::Set("ghost".to_string()),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect_err("user without person must be rejected");

        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Tests that other database errors stay internal.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn other_database_errors_are_internal() {
        let response =
            AppError::from(DbErr::Custom("connection lost".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
