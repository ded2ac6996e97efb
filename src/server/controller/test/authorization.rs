use super::*;

#[tokio::test]
async fn resolves_user_permissions() {
    let (app, db) = app().await;
    let (user, role, form, permission) =
        factory::helpers::create_user_with_grant(&db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/roles", user.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], role.id);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/users/{}/permissions", user.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["form_id"], form.id);
    assert_eq!(body[0]["permissions"], json!([permission.name]));
}

#[tokio::test]
async fn checks_user_permission() {
    let (app, db) = app().await;
    let (user, _, form, permission) = factory::helpers::create_user_with_grant(&db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!(
            "/api/users/{}/permissions/check?form_id={}&permission={}",
            user.id,
            form.id,
            permission.name.replace(' ', "%20")
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], true);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!(
            "/api/users/{}/permissions/check?form_id={}&permission=delete",
            user.id, form.id
        ),
        None,
    )
    .await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn lists_module_forms() {
    let (app, db) = app().await;
    let module = factory::create_module(&db).await.unwrap();
    let form = factory::create_form(&db).await.unwrap();
    factory::create_form_module(&db, form.id, module.id)
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/modules/{}/forms", module.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["route"], form.route);

    let (status, _) = send(&app, Method::GET, "/api/modules/999/forms", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
