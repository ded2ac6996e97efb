//! RBAC Admin Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the RBAC
//! administration backend. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas, plus factories that
//! insert entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories handling foreign key dependencies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Role;
//!
//! #[tokio::test]
//! async fn test_role_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Role)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
