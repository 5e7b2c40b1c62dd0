use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_update_history_place_partial() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Harry Sasson")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context
        .api
        .history_places
        .update(
            &id,
            json!({
                "name": "Harry's Bakery",
                "address": null,
                "rating": 3.5,
                "photo": "https://photos.test/harry.jpg",
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["id"], created["id"]);
    assert_eq!(resp["placeId"], "p1");
    assert_eq!(resp["name"], "Harry's Bakery");
    assert!(resp["address"].is_null());
    assert_eq!(resp["rating"], 3.5);
    assert_eq!(resp["photo"], "https://photos.test/harry.jpg");
    assert_eq!(resp["location"], created["location"]);
    assert_eq!(resp["types"], created["types"]);
    assert_eq!(resp["accessedAt"], created["accessedAt"]);
}

#[tokio::test]
async fn test_update_history_place_accessed_at() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Leo")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context
        .api
        .history_places
        .update(&id, json!({ "accessedAt": "2030-01-01T05:00:00+05:00" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await["accessedAt"],
        "2030-01-01T00:00:00.000Z"
    );
}

#[tokio::test]
async fn test_update_history_place_of_other_user() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Leo")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let resp = context
        .api_as("user-2")
        .history_places
        .update(&id, json!({ "name": "Hijacked" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "BR_0009");
    let stored = context.api.history_places.get(&id).await.json_value().await;
    assert_eq!(stored["name"], "Leo");
}

#[tokio::test]
async fn test_update_history_place_not_found() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .update(
            &"5a1f6a39-8c5e-4b5f-9d7e-2a9b3f0f1c11",
            json!({ "name": "Ghost" }),
        )
        .await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_update_history_place_invalid_body() {
    // GIVEN
    let context = TestContext::new(None).await;
    let created = context
        .api
        .history_places
        .create("p1", "Leo")
        .await
        .json_value()
        .await;
    let id = created["id"].as_str().unwrap();

    // WHEN
    let empty_name = context
        .api
        .history_places
        .update(&id, json!({ "name": "" }))
        .await;
    let invalid_location = context
        .api
        .history_places
        .update(&id, json!({ "location": { "lat": 0.0, "lng": 200.0 } }))
        .await;

    // THEN
    assert_eq!(empty_name.status(), 400);
    assert_eq!(empty_name.json_value().await["code"], "BR_0014");
    assert_eq!(invalid_location.status(), 400);
    assert_eq!(invalid_location.json_value().await["code"], "BR_0008");
}
