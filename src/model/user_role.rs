use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRoleDto {
    pub id: i32,
    pub user_id: i32,
    pub role_id: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRolePayload {
    pub user_id: i32,
    pub role_id: i32,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::user_role::Model> for UserRoleDto {
    fn from(model: entity::user_role::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            role_id: model.role_id,
            active: model.active,
        }
    }
}
