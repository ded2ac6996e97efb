use super::*;
use crate::{
    model::{
        api::DeleteType,
        branch::BranchPayload,
        card::CardPayload,
        event::EventPayload,
        form::FormPayload,
        person::PersonPayload,
        session::SessionPayload,
        user_role::UserRolePayload,
    },
    server::service::crud::CrudService,
};

/// Tests creating a child whose parent does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Organization)
        .with_table(Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CrudService::<Branch>::new(db)
        .create(BranchPayload {
            organization_id: 77,
            name: "North".to_string(),
            address: None,
            active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a child whose parent is logically deleted.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Organization)
        .with_table(Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    CrudService::<Organization>::new(db)
        .delete(organization.id, DeleteType::Logical)
        .await?;

    let result = CrudService::<Branch>::new(db)
        .create(BranchPayload {
            organization_id: organization.id,
            name: "North".to_string(),
            address: Some(" 1 Main St ".to_string()),
            active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests assigning the same role to a user twice.
///
/// Expected: Err(Conflict) on the second assignment
#[tokio::test]
async fn rejects_duplicate_association() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let user = factory::create_user(db, person.id).await?;
    let role = factory::create_role(db).await?;

    let service = CrudService::<UserRole>::new(db);
    let payload = UserRolePayload {
        user_id: user.id,
        role_id: role.id,
        active: true,
    };

    service.create(payload.clone()).await?;
    let result = service.create(payload).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests person field validation.
///
/// Expected: Err(BadRequest) for a malformed email, Err(Conflict) for a reused
/// document number
#[tokio::test]
async fn validates_person_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::person::PersonFactory::new(db)
        .document_number("12345678")
        .build()
        .await?;

    let payload = |document_number: &str, email: Option<&str>| PersonPayload {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        document_number: document_number.to_string(),
        email: email.map(str::to_string),
        phone: None,
        active: true,
    };

    let service = CrudService::<Person>::new(db);

    assert!(matches!(
        service.create(payload("87654321", Some("not-an-email"))).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(payload(&existing.document_number, None)).await,
        Err(AppError::Conflict(_))
    ));

    let created = service
        .create(payload("87654321", Some("ada@example.com")))
        .await?;
    assert_eq!(created.email.as_deref(), Some("ada@example.com"));

    Ok(())
}

/// Tests that form routes must be absolute paths.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_relative_form_route() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Form).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CrudService::<Form>::new(db)
        .create(FormPayload {
            name: "Users".to_string(),
            description: None,
            route: "users".to_string(),
            active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating an event that ends before it starts.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_event_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, division, _) = factory::helpers::create_event_with_dependencies(db).await?;
    let now = Utc::now();

    let result = CrudService::<Event>::new(db)
        .create(EventPayload {
            division_id: division.id,
            name: "Conference".to_string(),
            description: None,
            starts_at: now,
            ends_at: now - Duration::hours(2),
            active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that sessions must lie inside their event's window.
///
/// Expected: Ok inside the window, Err(BadRequest) when overrunning it
#[tokio::test]
async fn keeps_sessions_inside_event_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, division, _) = factory::helpers::create_event_with_dependencies(db).await?;
    let starts_at = Utc::now();
    let event = factory::event::EventFactory::new(db, division.id)
        .window(starts_at, starts_at + Duration::hours(8))
        .build()
        .await?;

    let service = CrudService::<Session>::new(db);
    let payload = |offset: i64, length: i64| SessionPayload {
        event_id: event.id,
        name: "Morning".to_string(),
        starts_at: starts_at + Duration::hours(offset),
        ends_at: starts_at + Duration::hours(offset + length),
        active: true,
    };

    assert!(service.create(payload(1, 2)).await.is_ok());
    assert!(matches!(
        service.create(payload(7, 2)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(payload(-1, 2)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that a card cannot expire before it is issued.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_card_expiring_before_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let issued_at = Utc::now();

    let result = CrudService::<Card>::new(db)
        .create(CardPayload {
            person_id: person.id,
            code: "CARD-X".to_string(),
            issued_at,
            expires_at: Some(issued_at - Duration::days(1)),
            active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
