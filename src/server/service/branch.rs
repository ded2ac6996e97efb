use async_trait::async_trait;
use entity::{branch, organization};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::branch::BranchPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<branch::Entity> for BranchPayload {
    async fn validate(&self, db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .reference::<organization::Entity>(self.organization_id)
            .await?;

        Ok(())
    }

    fn apply(self, model: &mut branch::ActiveModel) {
        model.organization_id = Set(self.organization_id);
        model.name = Set(clean(self.name));
        model.address = Set(clean_optional(self.address));
        model.active = Set(self.active);
    }
}
