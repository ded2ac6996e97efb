use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub card_id: i32,
    pub session_id: i32,
    pub access_point_id: i32,
    pub registered_at: DateTime<Utc>,
    pub active: bool,
}

/// Administrative create/update of an attendance row with an explicit timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendancePayload {
    pub card_id: i32,
    pub session_id: i32,
    pub access_point_id: i32,
    pub registered_at: DateTime<Utc>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

/// Card swipe at an access point, registered at the current time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterAttendanceDto {
    pub card_code: String,
    pub session_id: i32,
    pub access_point_id: i32,
}

impl From<entity::attendance::Model> for AttendanceDto {
    fn from(model: entity::attendance::Model) -> Self {
        Self {
            id: model.id,
            card_id: model.card_id,
            session_id: model.session_id,
            access_point_id: model.access_point_id,
            registered_at: model.registered_at,
            active: model.active,
        }
    }
}
