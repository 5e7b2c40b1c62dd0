use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_history_place_success() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Andrés Carne de Res")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context.api.history_places.get(&id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, created);
}

#[tokio::test]
async fn test_get_history_place_of_other_user() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Andrés Carne de Res")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context.api_as("user-2").history_places.get(&id).await;

    // THEN
    assert_eq!(resp.status(), 403);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0009");
    assert!(resp.get("userId").is_none());
    assert!(resp.get("placeId").is_none());
}

#[tokio::test]
async fn test_get_history_place_not_found() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .get(&"5a1f6a39-8c5e-4b5f-9d7e-2a9b3f0f1c11")
        .await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_get_history_place_invalid_id() {
    let context = TestContext::new(None).await;

    let resp = context.api.history_places.get(&"not-a-uuid").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0014");
}
