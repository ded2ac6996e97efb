use async_trait::async_trait;
use entity::{form, form_module, module};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::form_module::FormModulePayload,
    server::{
        error::AppError,
        service::{validation::Checks, EntityPayload},
    },
};

#[async_trait]
impl EntityPayload<form_module::Entity> for FormModulePayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        let checks = Checks::new(db);

        checks.reference::<form::Entity>(self.form_id).await?;
        checks.reference::<module::Entity>(self.module_id).await?;
        checks
            .unique::<form_module::Entity>(
                Condition::all()
                    .add(form_module::Column::FormId.eq(self.form_id))
                    .add(form_module::Column::ModuleId.eq(self.module_id)),
                id,
                "Form is already part of this module",
            )
            .await
    }

    fn apply(self, model: &mut form_module::ActiveModel) {
        model.form_id = Set(self.form_id);
        model.module_id = Set(self.module_id);
        model.active = Set(self.active);
    }
}
