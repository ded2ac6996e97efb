use async_trait::async_trait;
use entity::role;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::role::RolePayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<role::Entity> for RolePayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .unique::<role::Entity>(
                role::Column::Name.eq(self.name.trim()),
                id,
                "A role with this name already exists",
            )
            .await
    }

    fn apply(self, model: &mut role::ActiveModel) {
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.active = Set(self.active);
    }
}
