use async_trait::async_trait;
use entity::{access_point, division};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::access_point::AccessPointPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<access_point::Entity> for AccessPointPayload {
    async fn validate(&self, db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;

        Checks::new(db)
            .reference::<division::Entity>(self.division_id)
            .await?;

        Ok(())
    }

    fn apply(self, model: &mut access_point::ActiveModel) {
        model.division_id = Set(self.division_id);
        model.name = Set(clean(self.name));
        model.location = Set(clean_optional(self.location));
        model.active = Set(self.active);
    }
}
