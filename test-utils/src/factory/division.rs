use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active division of the branch.
pub async fn create_division(
    db: &DatabaseConnection,
    branch_id: i32,
) -> Result<entity::division::Model, DbErr> {
    entity::division::ActiveModel {
        branch_id: ActiveValue::Set(branch_id),
        name: ActiveValue::Set(format!("Division {}", next_id())),
        description: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
