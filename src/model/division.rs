use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DivisionDto {
    pub id: i32,
    pub branch_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DivisionPayload {
    pub branch_id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::division::Model> for DivisionDto {
    fn from(model: entity::division::Model) -> Self {
        Self {
            id: model.id,
            branch_id: model.branch_id,
            name: model.name,
            description: model.description,
            active: model.active,
        }
    }
}
