use super::*;

/// Tests deleting through the repository with each delete type.
///
/// Expected: logical keeps the row inactive, permanent removes it
#[tokio::test]
async fn dispatches_on_delete_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_permission(db).await?;
    let removed = factory::create_permission(db).await?;

    let repo = Repository::<Permission>::new(db);

    assert!(repo.delete(kept.id, DeleteType::Logical).await?);
    assert!(repo.delete(removed.id, DeleteType::Permanent).await?);

    assert!(!repo.get_by_id(kept.id).await?.unwrap().active);
    assert!(repo.get_by_id(removed.id).await?.is_none());

    Ok(())
}

/// Tests deleting a record that does not exist.
///
/// Expected: Ok(false) for both delete types
#[tokio::test]
async fn returns_false_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Permission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<Permission>::new(db);

    assert!(!repo.delete(7, DeleteType::Logical).await?);
    assert!(!repo.delete(7, DeleteType::Permanent).await?);

    Ok(())
}
