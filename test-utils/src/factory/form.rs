use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active form with a unique name and route.
pub async fn create_form(db: &DatabaseConnection) -> Result<entity::form::Model, DbErr> {
    let id = next_id();
    entity::form::ActiveModel {
        name: ActiveValue::Set(format!("Form {}", id)),
        description: ActiveValue::Set(None),
        route: ActiveValue::Set(format!("/forms/{}", id)),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
