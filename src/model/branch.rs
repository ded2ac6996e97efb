use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BranchDto {
    pub id: i32,
    pub organization_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BranchPayload {
    pub organization_id: i32,
    pub name: String,
    pub address: Option<String>,
    #[serde(default = "super::api::default_active")]
    pub active: bool,
}

impl From<entity::branch::Model> for BranchDto {
    fn from(model: entity::branch::Model) -> Self {
        Self {
            id: model.id,
            organization_id: model.organization_id,
            name: model.name,
            address: model.address,
            active: model.active,
        }
    }
}
