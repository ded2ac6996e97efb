use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormModuleDto {
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormModulePayload {
    pub form_id: i32,
    pub module_id: i32,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::form_module::Model> for FormModuleDto {
    fn from(model: entity::form_module::Model) -> Self {
        Self {
            id: model.id,
            form_id: model.form_id,
            module_id: model.module_id,
            active: model.active,
        }
    }
}
