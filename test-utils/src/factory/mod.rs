//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Every
//! generated unique value (names, codes, document numbers) embeds a process-wide counter so
//! factories never collide with each other.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let person = factory::create_person(&db).await?;
//!     let user = factory::create_user(&db, person.id).await?;
//!
//!     // Create a whole hierarchy at once
//!     let (organization, branch, division, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Entities with time windows or flags worth overriding have a builder:
//!
//! ```rust,ignore
//! let card = factory::card::CardFactory::new(&db, person.id)
//!     .code("CARD-001")
//!     .expires_at(Some(Utc::now() - Duration::days(1)))
//!     .build()
//!     .await?;
//! ```

pub mod access_point;
pub mod attendance;
pub mod branch;
pub mod card;
pub mod division;
pub mod event;
pub mod form;
pub mod form_module;
pub mod helpers;
pub mod module;
pub mod organization;
pub mod permission;
pub mod person;
pub mod role;
pub mod role_form_permission;
pub mod session;
pub mod user;
pub mod user_role;

pub use access_point::create_access_point;
pub use attendance::create_attendance;
pub use branch::create_branch;
pub use card::create_card;
pub use division::create_division;
pub use event::create_event;
pub use form::create_form;
pub use form_module::create_form_module;
pub use module::{create_module, create_module_with_name};
pub use organization::create_organization;
pub use permission::{create_permission, create_permission_with_name};
pub use person::create_person;
pub use role::{create_role, create_role_with_name};
pub use role_form_permission::create_grant;
pub use session::create_session;
pub use user::create_user;
pub use user_role::create_user_role;
