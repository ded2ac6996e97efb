use async_trait::async_trait;
use entity::{person, user};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<user::Entity> for UserPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("username", &self.username)?;

        let checks = Checks::new(db);

        checks.reference::<person::Entity>(self.person_id).await?;
        checks
            .unique::<user::Entity>(
                user::Column::Username.eq(self.username.trim()),
                id,
                "Username is already taken",
            )
            .await
    }

    fn apply(self, model: &mut user::ActiveModel) {
        model.person_id = Set(self.person_id);
        model.username = Set(clean(self.username));
        model.active = Set(self.active);
    }
}
