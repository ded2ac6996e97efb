use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleFormPermissionDto {
    pub id: i32,
    pub role_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleFormPermissionPayload {
    pub role_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::role_form_permission::Model> for RoleFormPermissionDto {
    fn from(model: entity::role_form_permission::Model) -> Self {
        Self {
            id: model.id,
            role_id: model.role_id,
            form_id: model.form_id,
            permission_id: model.permission_id,
            active: model.active,
        }
    }
}
