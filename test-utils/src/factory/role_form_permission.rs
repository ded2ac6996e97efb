use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants a permission on a form to a role.
pub async fn create_grant(
    db: &DatabaseConnection,
    role_id: i32,
    form_id: i32,
    permission_id: i32,
) -> Result<entity::role_form_permission::Model, DbErr> {
    entity::role_form_permission::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        form_id: ActiveValue::Set(form_id),
        permission_id: ActiveValue::Set(permission_id),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
