use async_trait::async_trait;
use entity::{event, session};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::session::SessionPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, require_text, require_window, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<session::Entity> for SessionPayload {
    /// Sessions must fall entirely inside the window of their event.
    async fn validate(&self, db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_window(self.starts_at, self.ends_at)?;

        let event = Checks::new(db)
            .reference::<event::Entity>(self.event_id)
            .await?;

        if self.starts_at < event.starts_at || self.ends_at > event.ends_at {
            return Err(AppError::BadRequest(format!(
                "Session must take place between {} and {}",
                event.starts_at, event.ends_at
            )));
        }

        Ok(())
    }

    fn apply(self, model: &mut session::ActiveModel) {
        model.event_id = Set(self.event_id);
        model.name = Set(clean(self.name));
        model.starts_at = Set(self.starts_at);
        model.ends_at = Set(self.ends_at);
        model.active = Set(self.active);
    }
}
