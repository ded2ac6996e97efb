use async_trait::async_trait;
use entity::form;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::form::FormPayload,
    server::{
        error::AppError,
        service::{
            validation::{clean, clean_optional, require_text},
            EntityPayload,
        },
    },
};

#[async_trait]
impl EntityPayload<form::Entity> for FormPayload {
    async fn validate(&self, _db: &DatabaseConnection, _id: Option<i32>) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("route", &self.route)?;

        // Routes are client-side paths
        if !self.route.trim().starts_with('/') {
            return Err(AppError::BadRequest(
                "route must start with '/'".to_string(),
            ));
        }

        Ok(())
    }

    fn apply(self, model: &mut form::ActiveModel) {
        model.name = Set(clean(self.name));
        model.description = Set(clean_optional(self.description));
        model.route = Set(clean(self.route));
        model.active = Set(self.active);
    }
}
