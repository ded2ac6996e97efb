use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        authorization::{FormPermissionsDto, PermissionCheckDto},
        form::FormDto,
        role::RoleDto,
    },
    server::{error::AppError, service::authorization::AuthorizationService, state::AppState},
};

/// Tag for grouping authorization endpoints in OpenAPI documentation
pub static AUTHORIZATION_TAG: &str = "authorization";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PermissionCheckParams {
    /// Form the permission applies to
    pub form_id: i32,
    /// Permission name, e.g. `read`
    pub permission: String,
}

/// Get the active roles assigned to a user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/roles",
    tag = AUTHORIZATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved roles", body = Vec<RoleDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assigned_roles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let roles = AuthorizationService::new(&state.db).roles_for_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(RoleDto::from).collect::<Vec<_>>()),
    ))
}

/// Get the effective permissions of a user.
///
/// Resolves the user's active roles to the forms they may open, merging the permissions
/// granted by every role. Only active rows along the way count, and an inactive user
/// resolves to an empty list.
///
/// # Returns
/// - `200 OK` - Forms with their granted permissions and modules
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}/permissions",
    tag = AUTHORIZATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully resolved permissions", body = Vec<FormPermissionsDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_effective_permissions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let permissions = AuthorizationService::new(&state.db)
        .permissions_for_user(id)
        .await?;

    Ok((StatusCode::OK, Json(permissions)))
}

/// Check whether a user holds a permission on a form.
#[utoipa::path(
    get,
    path = "/api/users/{id}/permissions/check",
    tag = AUTHORIZATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        PermissionCheckParams
    ),
    responses(
        (status = 200, description = "Successfully checked permission", body = PermissionCheckDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_user_permission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<PermissionCheckParams>,
) -> Result<impl IntoResponse, AppError> {
    let allowed = AuthorizationService::new(&state.db)
        .check(id, params.form_id, &params.permission)
        .await?;

    Ok((StatusCode::OK, Json(PermissionCheckDto { allowed })))
}

/// Get the active forms attached to a module.
#[utoipa::path(
    get,
    path = "/api/modules/{id}/forms",
    tag = AUTHORIZATION_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved forms", body = Vec<FormDto>),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forms_of_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let forms = AuthorizationService::new(&state.db)
        .forms_for_module(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(forms.into_iter().map(FormDto::from).collect::<Vec<_>>()),
    ))
}
