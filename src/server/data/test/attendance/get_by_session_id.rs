use super::*;

/// Tests listing the attendances of a session.
///
/// Verifies ordering by registration time and that inactive rows and other sessions'
/// rows are excluded.
///
/// Expected: Ok with the two active rows, earliest first
#[tokio::test]
async fn lists_active_attendances_by_registration_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, division, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let session = factory::create_session(db, event.id).await?;
    let other_session = factory::create_session(db, event.id).await?;
    let access_point = factory::create_access_point(db, division.id).await?;
    let person = factory::create_person(db).await?;

    let late_card = factory::create_card(db, person.id).await?;
    let early_card = factory::create_card(db, person.id).await?;
    let removed_card = factory::create_card(db, person.id).await?;

    let late = factory::create_attendance(db, late_card.id, session.id, access_point.id).await?;
    let early = factory::create_attendance(db, early_card.id, session.id, access_point.id).await?;
    let removed =
        factory::create_attendance(db, removed_card.id, session.id, access_point.id).await?;
    factory::create_attendance(db, late_card.id, other_session.id, access_point.id).await?;

    let mut model: entity::attendance::ActiveModel = early.clone().into();
    model.registered_at = ActiveValue::Set(late.registered_at - Duration::minutes(5));
    model.update(db).await?;

    let mut model: entity::attendance::ActiveModel = removed.into();
    model.active = ActiveValue::Set(false);
    model.update(db).await?;

    let rows = AttendanceRepository::new(db)
        .get_by_session_id(session.id)
        .await?;

    assert_eq!(
        rows.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![early.id, late.id]
    );

    Ok(())
}
