use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active access point inside the division.
pub async fn create_access_point(
    db: &DatabaseConnection,
    division_id: i32,
) -> Result<entity::access_point::Model, DbErr> {
    entity::access_point::ActiveModel {
        division_id: ActiveValue::Set(division_id),
        name: ActiveValue::Set(format!("Gate {}", next_id())),
        location: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
