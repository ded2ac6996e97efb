use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub division_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPayload {
    pub division_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::event::Model> for EventDto {
    fn from(model: entity::event::Model) -> Self {
        Self {
            id: model.id,
            division_id: model.division_id,
            name: model.name,
            description: model.description,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            active: model.active,
        }
    }
}
