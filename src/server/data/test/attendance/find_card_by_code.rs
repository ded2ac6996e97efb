use super::*;

/// Tests looking up a card by its code.
///
/// Verifies that inactive cards are returned too so callers can report why the card
/// was rejected.
///
/// Expected: Ok(Some) for both cards, Ok(None) for an unknown code
#[tokio::test]
async fn finds_card_regardless_of_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    factory::card::CardFactory::new(db, person.id)
        .code("ACTIVE-1")
        .build()
        .await?;
    factory::card::CardFactory::new(db, person.id)
        .code("BLOCKED-1")
        .active(false)
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);

    assert!(repo.find_card_by_code("ACTIVE-1").await?.is_some());
    assert!(repo.find_card_by_code("BLOCKED-1").await?.is_some());
    assert!(repo.find_card_by_code("UNKNOWN").await?.is_none());

    Ok(())
}
