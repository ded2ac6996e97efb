use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: i32,
    pub person_id: i32,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardPayload {
    pub person_id: i32,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::card::Model> for CardDto {
    fn from(model: entity::card::Model) -> Self {
        Self {
            id: model.id,
            person_id: model.person_id,
            code: model.code,
            issued_at: model.issued_at,
            expires_at: model.expires_at,
            active: model.active,
        }
    }
}
