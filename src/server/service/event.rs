use async_trait::async_trait;
use entity::{division, event};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::event::EventPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, require_window, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<event::Entity> for EventPayload {
    async fn validate(&self, db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_window(self.starts_at, self.ends_at)?;

        Checks::new(db)
            .reference::<division::Entity>(self.division_id)
            .await?;

        Ok(())
    }

    fn apply(self, model: &mut event::ActiveModel) {
        model.division_id = Set(self.division_id);
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.starts_at = Set(self.starts_at);
        model.ends_at = Set(self.ends_at);
        model.active = Set(self.active);
    }
}
