//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities together
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event along with the organization, branch and division it belongs to.
///
/// The event is active and open from one day ago until one day from now.
///
/// # Returns
/// - `Ok((organization, branch, division, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::organization::Model,
        entity::branch::Model,
        entity::division::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let organization = crate::factory::organization::create_organization(db).await?;
    let branch = crate::factory::branch::create_branch(db, organization.id).await?;
    let division = crate::factory::division::create_division(db, branch.id).await?;
    let event = crate::factory::event::create_event(db, division.id).await?;

    Ok((organization, branch, division, event))
}

/// Creates a user holding one role which is granted one permission on one form.
///
/// Creates, in order: person, user, role, user-role link, form, permission, grant.
///
/// # Returns
/// - `Ok((user, role, form, permission))` - The entities making up the grant
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_grant(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::role::Model,
        entity::form::Model,
        entity::permission::Model,
    ),
    DbErr,
> {
    let person = crate::factory::person::create_person(db).await?;
    let user = crate::factory::user::create_user(db, person.id).await?;
    let role = crate::factory::role::create_role(db).await?;
    crate::factory::user_role::create_user_role(db, user.id, role.id).await?;
    let form = crate::factory::form::create_form(db).await?;
    let permission = crate::factory::permission::create_permission(db).await?;
    crate::factory::role_form_permission::create_grant(db, role.id, form.id, permission.id)
        .await?;

    Ok((user, role, form, permission))
}
