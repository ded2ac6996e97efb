use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active attendance registered now.
pub async fn create_attendance(
    db: &DatabaseConnection,
    card_id: i32,
    session_id: i32,
    access_point_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        card_id: ActiveValue::Set(card_id),
        session_id: ActiveValue::Set(session_id),
        access_point_id: ActiveValue::Set(access_point_id),
        registered_at: ActiveValue::Set(Utc::now()),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
