use super::*;

/// Tests listing the forms of a module.
///
/// Verifies that forms behind inactive links or inactive forms are excluded.
///
/// Expected: Ok with the single reachable form
#[tokio::test]
async fn returns_active_forms_of_module() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;
    let visible = factory::create_form(db).await?;
    let unlinked = factory::create_form(db).await?;
    let inactive = factory::create_form(db).await?;

    factory::create_form_module(db, visible.id, module.id).await?;
    let link = factory::create_form_module(db, unlinked.id, module.id).await?;
    factory::create_form_module(db, inactive.id, module.id).await?;

    Repository::<FormModule>::new(db)
        .delete(link.id, DeleteType::Logical)
        .await?;
    Repository::<Form>::new(db)
        .delete(inactive.id, DeleteType::Logical)
        .await?;

    let forms = AuthorizationRepository::new(db)
        .get_forms_for_module(module.id)
        .await?;

    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].id, visible.id);

    Ok(())
}
