use super::*;

/// Tests resolving the roles of a user.
///
/// Verifies that roles are returned ordered by name.
///
/// Expected: Ok with both roles, alphabetically
#[tokio::test]
async fn returns_assigned_roles_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let user = factory::create_user(db, person.id).await?;
    let editor = factory::create_role_with_name(db, "Editor").await?;
    let admin = factory::create_role_with_name(db, "Admin").await?;
    factory::create_role(db).await?;
    factory::create_user_role(db, user.id, editor.id).await?;
    factory::create_user_role(db, user.id, admin.id).await?;

    let roles = AuthorizationRepository::new(db)
        .get_roles_for_user(user.id)
        .await?;

    let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Admin", "Editor"]);

    Ok(())
}

/// Tests that inactive roles and inactive assignments are skipped.
///
/// Expected: Ok with only the role reachable through active rows
#[tokio::test]
async fn skips_inactive_roles_and_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let user = factory::create_user(db, person.id).await?;
    let kept = factory::create_role(db).await?;
    let inactive_role = factory::create_role(db).await?;
    let inactive_link = factory::create_role(db).await?;
    factory::create_user_role(db, user.id, kept.id).await?;
    factory::create_user_role(db, user.id, inactive_role.id).await?;
    let link = factory::create_user_role(db, user.id, inactive_link.id).await?;

    Repository::<Role>::new(db)
        .delete(inactive_role.id, DeleteType::Logical)
        .await?;
    Repository::<UserRole>::new(db)
        .delete(link.id, DeleteType::Logical)
        .await?;

    let roles = AuthorizationRepository::new(db)
        .get_roles_for_user(user.id)
        .await?;

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, kept.id);

    Ok(())
}
