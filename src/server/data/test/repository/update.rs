use super::*;

/// Tests updating a record loaded from the database.
///
/// Verifies that changed columns are written and the ID is preserved.
///
/// Expected: Ok with updated description
#[tokio::test]
async fn updates_changed_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Module).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module_with_name(db, "Reports").await?;

    let mut model = module.clone().into_active_model();
    model.description = ActiveValue::Set(Some("Monthly reports".to_string()));

    let updated = Repository::<Module>::new(db).update(model).await?;

    assert_eq!(updated.id, module.id);
    assert_eq!(updated.name, "Reports");
    assert_eq!(updated.description.as_deref(), Some("Monthly reports"));

    Ok(())
}

/// Tests restoring a logically deleted record by setting `active` again.
///
/// Expected: Ok with record active
#[tokio::test]
async fn restores_logically_deleted_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Module).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;
    let repo = Repository::<Module>::new(db);
    repo.delete(module.id, DeleteType::Logical).await?;

    let stored = repo.get_by_id(module.id).await?.unwrap();
    let mut model = stored.into_active_model();
    model.active = ActiveValue::Set(true);

    let restored = repo.update(model).await?;

    assert!(restored.active);

    Ok(())
}
