use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Person, User};
///
/// let test = TestBuilder::new()
///     .with_table(Person)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including its foreign keys. Tables should be added in dependency
    /// order (tables with foreign keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables of the security subdomain in dependency order:
    /// - Person, User
    /// - Role, Permission, Form, Module
    /// - UserRole, RoleFormPermission, FormModule
    ///
    /// Not combinable with `with_attendance_tables()` since both create `person`; use
    /// `with_all_tables()` instead.
    pub fn with_security_tables(self) -> Self {
        self.with_table(Person)
            .with_table(User)
            .with_table(Role)
            .with_table(Permission)
            .with_table(Form)
            .with_table(Module)
            .with_table(UserRole)
            .with_table(RoleFormPermission)
            .with_table(FormModule)
    }

    /// Adds all tables of the attendance subdomain in dependency order:
    /// - Organization, Branch, Division
    /// - Person, Card
    /// - Event, Session, AccessPoint, Attendance
    pub fn with_attendance_tables(self) -> Self {
        self.with_table(Organization)
            .with_table(Branch)
            .with_table(Division)
            .with_table(Person)
            .with_table(Card)
            .with_table(Event)
            .with_table(Session)
            .with_table(AccessPoint)
            .with_table(Attendance)
    }

    /// Adds every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_attendance_tables()
            .with_table(User)
            .with_table(Role)
            .with_table(Permission)
            .with_table(Form)
            .with_table(Module)
            .with_table(UserRole)
            .with_table(RoleFormPermission)
            .with_table(FormModule)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
