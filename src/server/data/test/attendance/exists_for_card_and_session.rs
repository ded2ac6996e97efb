use super::*;

/// Tests detecting an existing registration of a card for a session.
///
/// Expected: true for the registered session only
#[tokio::test]
async fn detects_existing_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, division, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let registered = factory::create_session(db, event.id).await?;
    let other = factory::create_session(db, event.id).await?;
    let access_point = factory::create_access_point(db, division.id).await?;
    let person = factory::create_person(db).await?;
    let card = factory::create_card(db, person.id).await?;

    factory::create_attendance(db, card.id, registered.id, access_point.id).await?;

    let repo = AttendanceRepository::new(db);

    assert!(repo.exists_for_card_and_session(card.id, registered.id).await?);
    assert!(!repo.exists_for_card_and_session(card.id, other.id).await?);

    Ok(())
}

/// Tests that an inactive registration still counts as existing.
///
/// Expected: true
#[tokio::test]
async fn counts_inactive_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, division, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let session = factory::create_session(db, event.id).await?;
    let access_point = factory::create_access_point(db, division.id).await?;
    let person = factory::create_person(db).await?;
    let card = factory::create_card(db, person.id).await?;

    let attendance = factory::create_attendance(db, card.id, session.id, access_point.id).await?;
    let mut model: entity::attendance::ActiveModel = attendance.into();
    model.active = ActiveValue::Set(false);
    model.update(db).await?;

    assert!(AttendanceRepository::new(db)
        .exists_for_card_and_session(card.id, session.id)
        .await?);

    Ok(())
}
