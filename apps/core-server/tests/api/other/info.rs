use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.build_info().await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "foodie-core");
    assert!(resp["version"].as_str().is_some());
}

#[tokio::test]
async fn test_build_info_no_token_required() {
    let context = TestContext::new(None).await;

    let resp = context.api_with_token(None).other.build_info().await;

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_build_info_disabled() {
    let config = indoc::indoc! {"
      app:
        enableServerInfo: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.build_info().await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_health() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.health().await;
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_health_disabled() {
    let config = indoc::indoc! {"
      app:
        enableServerInfo: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.health().await;
    assert_eq!(resp.status(), 404);
}
