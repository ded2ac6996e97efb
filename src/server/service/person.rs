use async_trait::async_trait;
use entity::person;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection};

use crate::{
    model::person::PersonPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text, Checks},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<person::Entity> for PersonPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("document_number", &self.document_number)?;

        if let Some(email) = self.email.as_deref().map(str::trim) {
            if !email.is_empty() && !email.contains('@') {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not a valid email address",
                    email
                )));
            }
        }

        Checks::new(db)
            .unique::<person::Entity>(
                person::Column::DocumentNumber.eq(self.document_number.trim()),
                id,
                "A person with this document number already exists",
            )
            .await
    }

    fn apply(self, model: &mut person::ActiveModel) {
        model.first_name = Set(clean(self.first_name));
        model.last_name = Set(clean(self.last_name));
        model.document_number = Set(clean(self.document_number));
        model.email = Set(clean_optional(self.email));
        model.phone = Set(clean_optional(self.phone));
        model.active = Set(self.active);
    }
}
