use super::*;

/// Tests fetching the grants of several roles at once.
///
/// Verifies that only active grants of the requested roles are returned.
///
/// Expected: Ok with the two active grants
#[tokio::test]
async fn returns_active_grants_of_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_role(db).await?;
    let second = factory::create_role(db).await?;
    let other = factory::create_role(db).await?;
    let form = factory::create_form(db).await?;
    let read = factory::create_permission(db).await?;
    let write = factory::create_permission(db).await?;

    factory::create_grant(db, first.id, form.id, read.id).await?;
    factory::create_grant(db, second.id, form.id, read.id).await?;
    factory::create_grant(db, other.id, form.id, write.id).await?;
    let revoked = factory::create_grant(db, first.id, form.id, write.id).await?;
    Repository::<RoleFormPermission>::new(db)
        .delete(revoked.id, DeleteType::Logical)
        .await?;

    let grants = AuthorizationRepository::new(db)
        .get_grants_for_roles(vec![first.id, second.id])
        .await?;

    assert_eq!(grants.len(), 2);
    assert!(grants.iter().all(|g| g.permission_id == read.id));

    Ok(())
}
