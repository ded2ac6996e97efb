use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonPayload {
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::person::Model> for PersonDto {
    fn from(model: entity::person::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            document_number: model.document_number,
            email: model.email,
            phone: model.phone,
            active: model.active,
        }
    }
}
