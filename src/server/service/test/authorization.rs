use super::*;
use crate::{
    model::api::DeleteType,
    server::service::{authorization::AuthorizationService, crud::CrudService},
};

/// Tests resolving the effective permissions of a user.
///
/// Verifies that grants through several roles are merged per form with sorted,
/// de-duplicated permission names and the names of the form's modules.
///
/// Expected: Ok with one entry carrying both permissions and the module
#[tokio::test]
async fn merges_permissions_per_form() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, role, form, read) = factory::helpers::create_user_with_grant(db).await?;
    let write = factory::create_permission_with_name(db, "Write").await?;
    let second_role = factory::create_role(db).await?;
    factory::create_user_role(db, user.id, second_role.id).await?;
    factory::create_grant(db, second_role.id, form.id, read.id).await?;
    factory::create_grant(db, role.id, form.id, write.id).await?;
    let module = factory::create_module_with_name(db, "Security").await?;
    factory::create_form_module(db, form.id, module.id).await?;

    let entries = AuthorizationService::new(db)
        .permissions_for_user(user.id)
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].form_id, form.id);
    assert_eq!(entries[0].route, form.route);
    assert_eq!(entries[0].permissions, vec![read.name, "Write".to_string()]);
    assert_eq!(entries[0].modules, vec!["Security".to_string()]);

    Ok(())
}

/// Tests that logically deleted links drop out of the resolution.
///
/// Expected: Ok with empty list once the role is deactivated
#[tokio::test]
async fn ignores_inactive_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, role, _, _) = factory::helpers::create_user_with_grant(db).await?;
    let service = AuthorizationService::new(db);

    assert_eq!(service.permissions_for_user(user.id).await?.len(), 1);

    CrudService::<Role>::new(db)
        .delete(role.id, DeleteType::Logical)
        .await?;

    assert!(service.permissions_for_user(user.id).await?.is_empty());
    assert!(service.roles_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that an inactive user resolves to no permissions.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn inactive_user_has_no_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_user_with_grant(db).await?;
    CrudService::<User>::new(db)
        .delete(user.id, DeleteType::Logical)
        .await?;

    let entries = AuthorizationService::new(db)
        .permissions_for_user(user.id)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}

/// Tests checking a single permission.
///
/// Expected: true for the granted permission, false for others or other forms
#[tokio::test]
async fn checks_single_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, form, permission) = factory::helpers::create_user_with_grant(db).await?;
    let other_form = factory::create_form(db).await?;
    let service = AuthorizationService::new(db);

    assert!(service.check(user.id, form.id, &permission.name).await?);
    assert!(!service.check(user.id, form.id, "delete").await?);
    assert!(!service.check(user.id, other_form.id, &permission.name).await?);

    Ok(())
}

/// Tests resolving a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthorizationService::new(db);

    assert!(matches!(
        service.permissions_for_user(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.roles_for_user(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.forms_for_module(404).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
