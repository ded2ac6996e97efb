use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessPointDto {
    pub id: i32,
    pub division_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessPointPayload {
    pub division_id: i32,
    pub name: String,
    pub location: Option<String>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::access_point::Model> for AccessPointDto {
    fn from(model: entity::access_point::Model) -> Self {
        Self {
            id: model.id,
            division_id: model.division_id,
            name: model.name,
            location: model.location,
            active: model.active,
        }
    }
}
