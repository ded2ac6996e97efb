use async_trait::async_trait;
use entity::{branch, division};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::division::DivisionPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<division::Entity> for DivisionPayload {
    async fn validate(&self, db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .reference::<branch::Entity>(self.branch_id)
            .await?;

        Ok(())
    }

    fn apply(self, model: &mut division::ActiveModel) {
        model.branch_id = Set(self.branch_id);
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.active = Set(self.active);
    }
}
