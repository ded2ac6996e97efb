use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganizationDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationPayload {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::organization::Model> for OrganizationDto {
    fn from(model: entity::organization::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            active: model.active,
        }
    }
}
