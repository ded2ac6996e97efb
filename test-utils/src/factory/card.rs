//! Card factory for creating test card entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db, person.id)
///     .code("CARD-001")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    person_id: i32,
    code: String,
    issued_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    active: bool,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - code: `"CARD-{id}"` where id is auto-incremented
    /// - issued_at: thirty days ago
    /// - expires_at: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, person_id: i32) -> Self {
        Self {
            db,
            person_id,
            code: format!("CARD-{}", next_id()),
            issued_at: Utc::now() - Duration::days(30),
            expires_at: None,
            active: true,
        }
    }

    /// Sets the code printed on the card.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the expiry of the card.
    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets whether the card is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            person_id: ActiveValue::Set(self.person_id),
            code: ActiveValue::Set(self.code),
            issued_at: ActiveValue::Set(self.issued_at),
            expires_at: ActiveValue::Set(self.expires_at),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, non-expiring card for the person.
pub async fn create_card(
    db: &DatabaseConnection,
    person_id: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, person_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::person::create_person};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_card_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Person)
            .with_table(Card)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let person = create_person(db).await?;
        let expires_at = Utc::now() + Duration::days(365);
        let card = CardFactory::new(db, person.id)
            .code("CARD-001")
            .expires_at(Some(expires_at))
            .active(false)
            .build()
            .await?;

        assert_eq!(card.person_id, person.id);
        assert_eq!(card.code, "CARD-001");
        assert!(card.expires_at.is_some());
        assert!(!card.active);

        Ok(())
    }
}
