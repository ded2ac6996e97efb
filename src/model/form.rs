use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub route: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormPayload {
    pub name: String,
    pub description: Option<String>,
    pub route: String,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::form::Model> for FormDto {
    fn from(model: entity::form::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            route: model.route,
            active: model.active,
        }
    }
}
