use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Attaches a form to a module.
pub async fn create_form_module(
    db: &DatabaseConnection,
    form_id: i32,
    module_id: i32,
) -> Result<entity::form_module::Model, DbErr> {
    entity::form_module::ActiveModel {
        form_id: ActiveValue::Set(form_id),
        module_id: ActiveValue::Set(module_id),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
