use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active organization with a unique name.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    entity::organization::ActiveModel {
        name: ActiveValue::Set(format!("Organization {}", next_id())),
        description: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
