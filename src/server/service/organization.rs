use async_trait::async_trait;
use entity::organization;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::organization::OrganizationPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<organization::Entity> for OrganizationPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .unique::<organization::Entity>(
                organization::Column::Name.eq(self.name.trim()),
                id,
                "An organization with this name already exists",
            )
            .await
    }

    fn apply(self, model: &mut organization::ActiveModel) {
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.active = Set(self.active);
    }
}
