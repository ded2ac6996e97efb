use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active user account for the person with a unique username.
pub async fn create_user(
    db: &DatabaseConnection,
    person_id: i32,
) -> Result<entity::user::Model, DbErr> {
    create_user_with_username(db, person_id, format!("user{}", next_id())).await
}

/// Creates an active user account with a specific username.
pub async fn create_user_with_username(
    db: &DatabaseConnection,
    person_id: i32,
    username: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    entity::user::ActiveModel {
        person_id: ActiveValue::Set(person_id),
        username: ActiveValue::Set(username.into()),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
