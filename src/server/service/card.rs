use async_trait::async_trait;
use entity::{card, person};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::card::CardPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<card::Entity> for CardPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("code", &self.code)?;

        if let Some(expires_at) = self.expires_at {
            if expires_at <= self.issued_at {
                return Err(AppError::BadRequest(
                    "expires_at must be after issued_at".to_string(),
                ));
            }
        }

        let checks = Checks::new(db);

        checks.reference::<person::Entity>(self.person_id).await?;
        checks
            .unique::<card::Entity>(
                card::Column::Code.eq(self.code.trim()),
                id,
                "A card with this code already exists",
            )
            .await
    }

    fn apply(self, model: &mut card::ActiveModel) {
        model.person_id = Set(self.person_id);
        model.code = Set(clean(self.code));
        model.issued_at = Set(self.issued_at);
        model.expires_at = Set(self.expires_at);
        model.active = Set(self.active);
    }
}
