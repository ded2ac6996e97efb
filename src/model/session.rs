use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionPayload {
    pub event_id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::session::Model> for SessionDto {
    fn from(model: entity::session::Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            name: model.name,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            active: model.active,
        }
    }
}
