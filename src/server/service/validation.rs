//! Shared validation rules used by the entity payloads.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::IntoCondition, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::server::{data::Record, error::AppError};

/// Database-backed checks run before a write.
pub struct Checks<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Checks<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures `id` names an existing, active `E` and returns it.
    ///
    /// # Returns
    /// - `Ok(Model)` - The referenced record
    /// - `Err(AppError::BadRequest)` - Record missing or logically deleted
    pub async fn reference<E>(&self, id: i32) -> Result<E::Model, AppError>
    where
        E: Record,
    {
        let model = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?;

        match model {
            Some(model) if E::is_active(&model) => Ok(model),
            Some(_) => Err(AppError::BadRequest(format!(
                "{} {} is inactive",
                E::LABEL,
                id
            ))),
            None => Err(AppError::BadRequest(format!(
                "{} {} does not exist",
                E::LABEL,
                id
            ))),
        }
    }

    /// Ensures no record of `E` other than `exclude` matches `condition`.
    ///
    /// Inactive records count as well, since unique indexes cover them.
    ///
    /// # Returns
    /// - `Ok(())` - No conflicting record
    /// - `Err(AppError::Conflict)` - Another record matches, with `message`
    pub async fn unique<E>(
        &self,
        condition: impl IntoCondition,
        exclude: Option<i32>,
        message: &str,
    ) -> Result<(), AppError>
    where
        E: Record,
        E::Model: Sync,
    {
        let mut query = E::find().filter(condition);
        if let Some(id) = exclude {
            query = query.filter(E::id_column().ne(id));
        }

        if query.count(self.db).await? > 0 {
            return Err(AppError::Conflict(message.to_string()));
        }

        Ok(())
    }
}

/// Ensures a required text field is not blank.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Trims a required text field for storage.
pub fn clean(value: String) -> String {
    value.trim().to_string()
}

/// Trims an optional text field, storing blank values as `None`.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ensures a time window starts strictly before it ends.
pub fn require_window(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<(), AppError> {
    if starts_at >= ends_at {
        return Err(AppError::BadRequest(
            "starts_at must be before ends_at".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use chrono::Duration;

    use super::*;

    #[test]
    fn rejects_blank_required_text() {
        assert!(require_text("name", "   ").is_err());
        assert!(require_text("name", "").is_err());
        assert!(require_text("name", " Admin ").is_ok());
    }

    #[test]
    fn cleans_optional_text() {
        assert_eq!(clean_optional(Some("  ".to_string())), None);
        assert_eq!(clean_optional(None), None);
        assert_eq!(
            clean_optional(Some(" Main street ".to_string())),
            Some("Main street".to_string())
        );
    }

    #[test]
    fn requires_start_before_end() {
        let now = Utc::now();

        assert!(require_window(now, now + Duration::hours(1)).is_ok());
        assert!(require_window(now, now).is_err());
        assert!(require_window(now + Duration::hours(1), now).is_err());
    }
}
