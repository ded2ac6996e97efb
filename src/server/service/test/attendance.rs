use super::*;
use crate::{
    model::attendance::RegisterAttendanceDto,
    server::service::attendance::AttendanceService,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel,
};

/// Card, open session and matching access point ready for a registration.
struct Scenario {
    card: entity::card::Model,
    session: entity::session::Model,
    access_point: entity::access_point::Model,
    division: entity::division::Model,
    event: entity::event::Model,
}

async fn scenario(db: &DatabaseConnection) -> Result<Scenario, DbErr> {
    let (_, _, division, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let session = factory::create_session(db, event.id).await?;
    let access_point = factory::create_access_point(db, division.id).await?;
    let person = factory::create_person(db).await?;
    let card = factory::create_card(db, person.id).await?;

    Ok(Scenario {
        card,
        session,
        access_point,
        division,
        event,
    })
}

fn swipe(card_code: &str, session_id: i32, access_point_id: i32) -> RegisterAttendanceDto {
    RegisterAttendanceDto {
        card_code: card_code.to_string(),
        session_id,
        access_point_id,
    }
}

/// Tests registering a valid card swipe.
///
/// Expected: Ok with attendance stamped at the provided time
#[tokio::test]
async fn registers_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let now = Utc::now();

    let attendance = AttendanceService::new(db)
        .register_at(swipe(&s.card.code, s.session.id, s.access_point.id), now)
        .await?;

    assert_eq!(attendance.card_id, s.card.id);
    assert_eq!(attendance.session_id, s.session.id);
    assert_eq!(attendance.access_point_id, s.access_point.id);
    assert!(attendance.active);

    let listed = AttendanceService::new(db).get_by_session(s.session.id).await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}

/// Tests registering the same card twice for a session.
///
/// Expected: Err(Conflict) on the second swipe
#[tokio::test]
async fn rejects_second_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let service = AttendanceService::new(db);

    service
        .register(swipe(&s.card.code, s.session.id, s.access_point.id))
        .await?;
    let result = service
        .register(swipe(&s.card.code, s.session.id, s.access_point.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with unknown identifiers.
///
/// Expected: Err(NotFound) for an unknown card, session or access point
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let service = AttendanceService::new(db);

    assert!(matches!(
        service
            .register(swipe("NOPE", s.session.id, s.access_point.id))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .register(swipe(&s.card.code, 999, s.access_point.id))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .register(swipe(&s.card.code, s.session.id, 999))
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests registering inactive or expired cards.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn rejects_unusable_cards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let inactive = factory::card::CardFactory::new(db, s.card.person_id)
        .active(false)
        .build()
        .await?;
    let expired = factory::card::CardFactory::new(db, s.card.person_id)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let service = AttendanceService::new(db);

    for card in [inactive, expired] {
        assert!(matches!(
            service
                .register(swipe(&card.code, s.session.id, s.access_point.id))
                .await,
            Err(AppError::BadRequest(_))
        ));
    }

    Ok(())
}

/// Tests registering outside the session window.
///
/// Expected: Err(BadRequest) before the start and after the end
#[tokio::test]
async fn rejects_closed_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let service = AttendanceService::new(db);

    for now in [
        s.session.starts_at - Duration::minutes(1),
        s.session.ends_at + Duration::minutes(1),
    ] {
        assert!(matches!(
            service
                .register_at(swipe(&s.card.code, s.session.id, s.access_point.id), now)
                .await,
            Err(AppError::BadRequest(_))
        ));
    }

    Ok(())
}

/// Tests registering at an access point of another division.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_access_point_of_other_division() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let other_division = factory::create_division(db, s.division.branch_id).await?;
    let elsewhere = factory::create_access_point(db, other_division.id).await?;

    let result = AttendanceService::new(db)
        .register(swipe(&s.card.code, s.session.id, elsewhere.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests listing attendances of a missing session.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn listing_fails_for_missing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AttendanceService::new(db).get_by_session(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests registering against an inactive session.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let mut session = s.session.into_active_model();
    session.active = Set(false);
    let session = session.update(db).await?;

    let result = AttendanceService::new(db)
        .register(swipe(&s.card.code, session.id, s.access_point.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering against a session whose event is inactive.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let mut event = s.event.into_active_model();
    event.active = Set(false);
    event.update(db).await?;

    let result = AttendanceService::new(db)
        .register(swipe(&s.card.code, s.session.id, s.access_point.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering at an inactive access point.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_access_point() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let mut access_point = s.access_point.into_active_model();
    access_point.active = Set(false);
    let access_point = access_point.update(db).await?;

    let result = AttendanceService::new(db)
        .register(swipe(&s.card.code, s.session.id, access_point.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering exactly at the first and last instant of the session window.
///
/// Expected: Ok for both edges
#[tokio::test]
async fn accepts_window_edges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;
    let session = Session::find_by_id(s.session.id)
        .one(db)
        .await?
        .unwrap();
    let late = factory::create_card(db, s.card.person_id).await?;
    let service = AttendanceService::new(db);

    let first = service
        .register_at(
            swipe(&s.card.code, session.id, s.access_point.id),
            session.starts_at,
        )
        .await?;
    let last = service
        .register_at(
            swipe(&late.code, session.id, s.access_point.id),
            session.ends_at,
        )
        .await?;

    assert_eq!(first.registered_at, session.starts_at);
    assert_eq!(last.registered_at, session.ends_at);

    Ok(())
}

/// Tests registering against a session whose event row no longer exists.
///
/// Foreign keys are switched off so the event can be removed without cascading.
///
/// Expected: Err(InternalError)
#[tokio::test]
async fn fails_internally_for_session_without_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let s = scenario(db).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    Event::delete_by_id(s.event.id).exec(db).await?;

    let result = AttendanceService::new(db)
        .register(swipe(&s.card.code, s.session.id, s.access_point.id))
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
