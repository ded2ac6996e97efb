use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active module with a unique name.
pub async fn create_module(db: &DatabaseConnection) -> Result<entity::module::Model, DbErr> {
    create_module_with_name(db, format!("Module {}", next_id())).await
}

/// Creates an active module with a specific name.
pub async fn create_module_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::module::Model, DbErr> {
    entity::module::ActiveModel {
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
