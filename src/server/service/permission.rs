use async_trait::async_trait;
use entity::permission;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::permission::PermissionPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<permission::Entity> for PermissionPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .unique::<permission::Entity>(
                permission::Column::Name.eq(self.name.trim()),
                id,
                "A permission with this name already exists",
            )
            .await
    }

    fn apply(self, model: &mut permission::ActiveModel) {
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.active = Set(self.active);
    }
}
