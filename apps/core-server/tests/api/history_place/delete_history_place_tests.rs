use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_delete_history_place_success() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Crepes & Waffles")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context.api.history_places.delete(&id).await;

    // THEN
    assert_eq!(resp.status(), 204);
    let resp = context.api.history_places.get(&id).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_history_place_of_other_user() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Crepes & Waffles")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context
        .api_as("user-2")
        .history_places
        .delete(&id)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "BR_0009");
    assert_eq!(context.api.history_places.get(&id).await.status(), 200);
}

#[tokio::test]
async fn test_delete_history_place_not_found() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .delete(&"5a1f6a39-8c5e-4b5f-9d7e-2a9b3f0f1c11")
        .await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}
