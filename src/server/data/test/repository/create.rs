use super::*;

/// Tests inserting a record through the generic repository.
///
/// Verifies that the returned model carries the generated ID and the inserted values.
///
/// Expected: Ok with stored organization
#[tokio::test]
async fn creates_record_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<Organization>::new(db);
    let created = repo
        .create(entity::organization::ActiveModel {
            name: ActiveValue::Set("Acme".to_string()),
            description: ActiveValue::Set(Some("Head office".to_string())),
            active: ActiveValue::Set(true),
            ..Default::default()
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Acme");

    let stored = Organization::find_by_id(created.id).one(db).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests inserting a child row whose parent does not exist.
///
/// Verifies that the foreign key rejects the insert.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Organization)
        .with_table(Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = Repository::<Branch>::new(db)
        .create(entity::branch::ActiveModel {
            organization_id: ActiveValue::Set(999),
            name: ActiveValue::Set("Orphan".to_string()),
            address: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
