use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active branch of the organization.
pub async fn create_branch(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::branch::Model, DbErr> {
    entity::branch::ActiveModel {
        organization_id: ActiveValue::Set(organization_id),
        name: ActiveValue::Set(format!("Branch {}", next_id())),
        address: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
