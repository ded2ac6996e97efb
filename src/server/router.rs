use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        access_point::{self, ACCESS_POINT_TAG},
        attendance::{self, ATTENDANCE_TAG},
        authorization::{self, AUTHORIZATION_TAG},
        branch::{self, BRANCH_TAG},
        card::{self, CARD_TAG},
        division::{self, DIVISION_TAG},
        event::{self, EVENT_TAG},
        form::{self, FORM_TAG},
        form_module::{self, FORM_MODULE_TAG},
        module::{self, MODULE_TAG},
        organization::{self, ORGANIZATION_TAG},
        permission::{self, PERMISSION_TAG},
        person::{self, PERSON_TAG},
        role::{self, ROLE_TAG},
        role_form_permission::{self, ROLE_FORM_PERMISSION_TAG},
        session::{self, SESSION_TAG},
        user::{self, USER_TAG},
        user_role::{self, USER_ROLE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RBAC Admin API",
        description = "Administration of users, roles, permissions, forms and modules, plus event attendance"
    ),
    tags(
        (name = ORGANIZATION_TAG, description = "Organizations"),
        (name = BRANCH_TAG, description = "Branches of an organization"),
        (name = DIVISION_TAG, description = "Divisions of a branch"),
        (name = PERSON_TAG, description = "Persons"),
        (name = USER_TAG, description = "User accounts"),
        (name = ROLE_TAG, description = "Roles"),
        (name = PERMISSION_TAG, description = "Permissions"),
        (name = FORM_TAG, description = "Forms (UI screens)"),
        (name = MODULE_TAG, description = "Modules grouping forms"),
        (name = USER_ROLE_TAG, description = "Role assignments"),
        (name = ROLE_FORM_PERMISSION_TAG, description = "Permission grants on forms"),
        (name = FORM_MODULE_TAG, description = "Form membership in modules"),
        (name = EVENT_TAG, description = "Events"),
        (name = SESSION_TAG, description = "Sessions of an event"),
        (name = CARD_TAG, description = "Access cards"),
        (name = ACCESS_POINT_TAG, description = "Access points"),
        (name = ATTENDANCE_TAG, description = "Attendance registration"),
        (name = AUTHORIZATION_TAG, description = "Effective access resolution"),
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI documentation.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            organization::create_organization,
            organization::get_organizations
        ))
        .routes(routes!(
            organization::get_organization_by_id,
            organization::update_organization,
            organization::delete_organization
        ))
        .routes(routes!(branch::create_branch, branch::get_branches))
        .routes(routes!(
            branch::get_branch_by_id,
            branch::update_branch,
            branch::delete_branch
        ))
        .routes(routes!(division::create_division, division::get_divisions))
        .routes(routes!(
            division::get_division_by_id,
            division::update_division,
            division::delete_division
        ))
        .routes(routes!(person::create_person, person::get_persons))
        .routes(routes!(
            person::get_person_by_id,
            person::update_person,
            person::delete_person
        ))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(role::create_role, role::get_roles))
        .routes(routes!(
            role::get_role_by_id,
            role::update_role,
            role::delete_role
        ))
        .routes(routes!(
            permission::create_permission,
            permission::get_permissions
        ))
        .routes(routes!(
            permission::get_permission_by_id,
            permission::update_permission,
            permission::delete_permission
        ))
        .routes(routes!(form::create_form, form::get_forms))
        .routes(routes!(
            form::get_form_by_id,
            form::update_form,
            form::delete_form
        ))
        .routes(routes!(module::create_module, module::get_modules))
        .routes(routes!(
            module::get_module_by_id,
            module::update_module,
            module::delete_module
        ))
        .routes(routes!(user_role::create_user_role, user_role::get_user_roles))
        .routes(routes!(
            user_role::get_user_role_by_id,
            user_role::update_user_role,
            user_role::delete_user_role
        ))
        .routes(routes!(
            role_form_permission::create_role_form_permission,
            role_form_permission::get_role_form_permissions
        ))
        .routes(routes!(
            role_form_permission::get_role_form_permission_by_id,
            role_form_permission::update_role_form_permission,
            role_form_permission::delete_role_form_permission
        ))
        .routes(routes!(
            form_module::create_form_module,
            form_module::get_form_modules
        ))
        .routes(routes!(
            form_module::get_form_module_by_id,
            form_module::update_form_module,
            form_module::delete_form_module
        ))
        .routes(routes!(event::create_event, event::get_events))
        .routes(routes!(
            event::get_event_by_id,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(session::create_session, session::get_sessions))
        .routes(routes!(
            session::get_session_by_id,
            session::update_session,
            session::delete_session
        ))
        .routes(routes!(card::create_card, card::get_cards))
        .routes(routes!(
            card::get_card_by_id,
            card::update_card,
            card::delete_card
        ))
        .routes(routes!(
            access_point::create_access_point,
            access_point::get_access_points
        ))
        .routes(routes!(
            access_point::get_access_point_by_id,
            access_point::update_access_point,
            access_point::delete_access_point
        ))
        .routes(routes!(
            attendance::create_attendance,
            attendance::get_attendances
        ))
        .routes(routes!(
            attendance::get_attendance_by_id,
            attendance::update_attendance,
            attendance::delete_attendance
        ))
        .routes(routes!(attendance::register_attendance))
        .routes(routes!(attendance::get_session_attendances))
        .routes(routes!(authorization::get_assigned_roles))
        .routes(routes!(authorization::get_effective_permissions))
        .routes(routes!(authorization::check_user_permission))
        .routes(routes!(authorization::get_forms_of_module))
}

/// Builds the complete application: API routes, Swagger UI and request tracing.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and browsable at
/// `/swagger-ui`.
pub fn app(state: AppState) -> Router {
    let (router, api) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
