use super::*;

/// Tests fetching a record by ID.
///
/// Expected: Ok(Some) with matching record
#[tokio::test]
async fn returns_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let result = Repository::<Person>::new(db).get_by_id(person.id).await?;

    assert_eq!(result, Some(person));

    Ok(())
}

/// Tests that logically deleted records are still returned by ID.
///
/// Expected: Ok(Some) with inactive record
#[tokio::test]
async fn returns_inactive_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = Repository::<Person>::new(db).get_by_id(person.id).await?;

    assert!(result.is_some_and(|p| !p.active));

    Ok(())
}

/// Tests fetching a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = Repository::<Person>::new(db).get_by_id(1).await?;

    assert!(result.is_none());

    Ok(())
}
