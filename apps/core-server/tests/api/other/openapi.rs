use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_openapi_document() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.openapi().await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp["paths"]["/v1/places/browser-places"]["get"].is_object());
    assert!(resp["paths"]["/v1/history-places/{id}"]["put"].is_object());
    assert_eq!(
        resp["components"]["securitySchemes"]["bearer"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn test_openapi_disabled() {
    let config = indoc::indoc! {"
      app:
        enableOpenApi: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.openapi().await;
    assert_eq!(resp.status(), 404);
}
