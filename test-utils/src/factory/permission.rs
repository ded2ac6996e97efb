use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active permission with a unique name.
pub async fn create_permission(db: &DatabaseConnection) -> Result<entity::permission::Model, DbErr> {
    create_permission_with_name(db, format!("Permission {}", next_id())).await
}

/// Creates an active permission with a specific name.
pub async fn create_permission_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::permission::Model, DbErr> {
    entity::permission::ActiveModel {
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
