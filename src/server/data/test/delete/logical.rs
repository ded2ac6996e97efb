use super::*;

/// Tests logically deleting an active record.
///
/// Verifies that the strategy clears the `active` flag and keeps the row.
///
/// Expected: Ok(true) with row still present and inactive
#[tokio::test]
async fn clears_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;

    let deleted = DeleteStrategy::<Role>::delete(&LogicalDelete, db, role.id).await?;

    assert!(deleted);
    let stored = Role::find_by_id(role.id).one(db).await?.unwrap();
    assert!(!stored.active);
    assert_eq!(stored.name, role.name);

    Ok(())
}

/// Tests logically deleting a record that is already inactive.
///
/// Verifies that a second logical delete still reports success and leaves the
/// record inactive.
///
/// Expected: Ok(true) both times
#[tokio::test]
async fn is_idempotent_for_inactive_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;

    assert!(DeleteStrategy::<Role>::delete(&LogicalDelete, db, role.id).await?);
    assert!(DeleteStrategy::<Role>::delete(&LogicalDelete, db, role.id).await?);

    let stored = Role::find_by_id(role.id).one(db).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests logically deleting a record that does not exist.
///
/// Expected: Ok(false) with nothing written
#[tokio::test]
async fn returns_false_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = DeleteStrategy::<Role>::delete(&LogicalDelete, db, 999).await?;

    assert!(!deleted);
    assert_eq!(Role::find().count(db).await?, 0);

    Ok(())
}

/// Tests that logical delete leaves dependent rows untouched.
///
/// Verifies that deactivating a role keeps its user-role assignments active.
///
/// Expected: Ok with assignment still present and active
#[tokio::test]
async fn does_not_touch_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let user = factory::create_user(db, person.id).await?;
    let role = factory::create_role(db).await?;
    let assignment = factory::create_user_role(db, user.id, role.id).await?;

    DeleteStrategy::<Role>::delete(&LogicalDelete, db, role.id).await?;

    let stored = UserRole::find_by_id(assignment.id).one(db).await?.unwrap();
    assert!(stored.active);

    Ok(())
}
