use super::*;

/// Tests pagination over active records.
///
/// Verifies that pages are zero-indexed, ordered by ID and that the total counts
/// every matching record rather than the page size.
///
/// Expected: Ok with 2 records on page 0, 1 record on page 1, total 3
#[tokio::test]
async fn pages_records_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_role(db).await?;
    let second = factory::create_role(db).await?;
    let third = factory::create_role(db).await?;

    let repo = Repository::<Role>::new(db);

    let (page, total) = repo.get_paginated(0, 2, false).await?;
    assert_eq!(total, 3);
    assert_eq!(
        page.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let (page, total) = repo.get_paginated(1, 2, false).await?;
    assert_eq!(total, 3);
    assert_eq!(page.iter().map(|r| r.id).collect::<Vec<_>>(), vec![third.id]);

    Ok(())
}

/// Tests that inactive records are listed only on request.
///
/// Expected: 1 record without `include_inactive`, 2 with it
#[tokio::test]
async fn hides_inactive_records_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db).await?;
    let removed = factory::create_role(db).await?;

    let repo = Repository::<Role>::new(db);
    repo.delete(removed.id, DeleteType::Logical).await?;

    let (active, total) = repo.get_paginated(0, 10, false).await?;
    assert_eq!(total, 1);
    assert!(active.iter().all(|r| r.active));

    let (all, total) = repo.get_paginated(0, 10, true).await?;
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests requesting a page past the last one.
///
/// Expected: Ok with empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db).await?;

    let (page, total) = Repository::<Role>::new(db).get_paginated(5, 10, false).await?;

    assert!(page.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
