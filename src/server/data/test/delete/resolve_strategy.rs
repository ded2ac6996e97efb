use super::*;

/// Tests that the resolver dispatches `Logical` to the logical strategy.
///
/// Expected: Ok with row kept and inactive
#[tokio::test]
async fn resolves_logical() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Module).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;

    let deleted = resolve_strategy::<Module>(DeleteType::Logical)
        .delete(db, module.id)
        .await?;

    assert!(deleted);
    let stored = Module::find_by_id(module.id).one(db).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests that the resolver dispatches `Permanent` to the permanent strategy.
///
/// Expected: Ok with row removed
#[tokio::test]
async fn resolves_permanent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Module).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::create_module(db).await?;

    let deleted = resolve_strategy::<Module>(DeleteType::Permanent)
        .delete(db, module.id)
        .await?;

    assert!(deleted);
    assert!(Module::find_by_id(module.id).one(db).await?.is_none());

    Ok(())
}

/// Tests that `Logical` is the default delete type.
#[test]
fn defaults_to_logical() {
    assert_eq!(DeleteType::default(), DeleteType::Logical);
}
