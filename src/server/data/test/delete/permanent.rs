use super::*;

/// Tests permanently deleting a record.
///
/// Expected: Ok(true) with row removed
#[tokio::test]
async fn removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let permission = factory::create_permission(db).await?;
    let other = factory::create_permission(db).await?;

    let deleted = DeleteStrategy::<Permission>::delete(&PermanentDelete, db, permission.id).await?;

    assert!(deleted);
    assert!(Permission::find_by_id(permission.id).one(db).await?.is_none());
    assert!(Permission::find_by_id(other.id).one(db).await?.is_some());

    Ok(())
}

/// Tests permanently deleting an inactive record.
///
/// Verifies that the `active` flag does not prevent physical removal.
///
/// Expected: Ok(true) with row removed
#[tokio::test]
async fn removes_inactive_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let permission = factory::create_permission(db).await?;
    DeleteStrategy::<Permission>::delete(&LogicalDelete, db, permission.id).await?;

    let deleted = DeleteStrategy::<Permission>::delete(&PermanentDelete, db, permission.id).await?;

    assert!(deleted);
    assert_eq!(Permission::find().count(db).await?, 0);

    Ok(())
}

/// Tests permanently deleting a record that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = DeleteStrategy::<Permission>::delete(&PermanentDelete, db, 42).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that permanent delete cascades to association rows.
///
/// Verifies that removing a role removes its user-role assignments and grants
/// through the foreign keys, while the user, form and permission survive.
///
/// Expected: Ok with association rows removed
#[tokio::test]
async fn cascades_to_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, role, form, permission) = factory::helpers::create_user_with_grant(db).await?;

    DeleteStrategy::<Role>::delete(&PermanentDelete, db, role.id).await?;

    assert_eq!(UserRole::find().count(db).await?, 0);
    assert_eq!(RoleFormPermission::find().count(db).await?, 0);
    assert!(User::find_by_id(user.id).one(db).await?.is_some());
    assert!(Form::find_by_id(form.id).one(db).await?.is_some());
    assert!(Permission::find_by_id(permission.id).one(db).await?.is_some());

    Ok(())
}
