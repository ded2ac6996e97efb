use super::*;

#[tokio::test]
async fn serves_openapi_document() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/organizations"].is_object());
    assert!(body["paths"]["/api/roles/{id}"]["delete"].is_object());
    assert!(body["paths"]["/api/attendances/register"]["post"].is_object());
    assert!(body["paths"]["/api/users/{id}/permissions"]["get"].is_object());
}
