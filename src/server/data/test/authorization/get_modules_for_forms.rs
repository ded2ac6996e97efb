use super::*;

/// Tests resolving the modules containing a set of forms.
///
/// Verifies that each pair carries the form ID and that inactive modules are dropped.
///
/// Expected: Ok with one pair per active module link
#[tokio::test]
async fn pairs_forms_with_active_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users_form = factory::create_form(db).await?;
    let roles_form = factory::create_form(db).await?;
    let security = factory::create_module_with_name(db, "Security").await?;
    let legacy = factory::create_module_with_name(db, "Legacy").await?;

    factory::create_form_module(db, users_form.id, security.id).await?;
    factory::create_form_module(db, roles_form.id, security.id).await?;
    factory::create_form_module(db, roles_form.id, legacy.id).await?;
    Repository::<Module>::new(db)
        .delete(legacy.id, DeleteType::Logical)
        .await?;

    let pairs = AuthorizationRepository::new(db)
        .get_modules_for_forms(vec![users_form.id, roles_form.id])
        .await?;

    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|(_, module)| module.id == security.id));
    assert!(pairs.iter().any(|(form_id, _)| *form_id == users_form.id));
    assert!(pairs.iter().any(|(form_id, _)| *form_id == roles_form.id));

    Ok(())
}
