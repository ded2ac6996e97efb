//! Person factory for creating test person entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&db)
///     .document_number("12345678")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    document_number: String,
    email: Option<String>,
    active: bool,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Person"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - document_number: `"DOC-{id}"`
    /// - email: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Person".to_string(),
            last_name: id.to_string(),
            document_number: format!("DOC-{}", id),
            email: None,
            active: true,
        }
    }

    /// Sets the document number of the person.
    pub fn document_number(mut self, document_number: impl Into<String>) -> Self {
        self.document_number = document_number.into();
        self
    }

    /// Sets the email address of the person.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets whether the person is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the person entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            document_number: ActiveValue::Set(self.document_number),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active person with default values.
///
/// Shorthand for `PersonFactory::new(db).build().await`.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_person_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Person).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let person = create_person(db).await?;

        assert!(person.document_number.starts_with("DOC-"));
        assert!(person.email.is_none());
        assert!(person.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_persons() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Person).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_person(db).await?;
        let second = create_person(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.document_number, second.document_number);

        Ok(())
    }
}
