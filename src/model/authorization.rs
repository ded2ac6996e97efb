use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A form a user may open, with the permissions granted on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormPermissionsDto {
    pub form_id: i32,
    pub form_name: String,
    pub route: String,
    /// Names of the modules the form appears in, sorted.
    pub modules: Vec<String>,
    /// Names of the granted permissions, sorted and de-duplicated.
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PermissionCheckDto {
    pub allowed: bool,
}
