use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::{DEFAULT_USER, TestContext};

#[tokio::test]
async fn test_create_history_place_success() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .history_places
        .create("ChIJ-cevicheria", "La Cevichería")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert!(resp["id"].as_str().is_some());
    assert_eq!(resp["userId"], DEFAULT_USER);
    assert_eq!(resp["placeId"], "ChIJ-cevicheria");
    assert_eq!(resp["name"], "La Cevichería");
    assert_eq!(resp["address"], "Calle 10 # 5-20");
    assert_eq!(resp["location"], json!({ "lat": 4.711, "lng": -74.0721 }));
    assert_eq!(resp["rating"], 4.5);
    assert!(resp["photo"].is_null());
    assert_eq!(resp["types"], json!(["restaurant", "food"]));

    let accessed_at = resp["accessedAt"].as_str().unwrap();
    assert_eq!(accessed_at.len(), "2024-05-01T10:15:30.000Z".len());
    assert!(accessed_at.ends_with('Z'));
}

#[tokio::test]
async fn test_create_history_place_minimal_body() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .create_with_body(json!({
            "placeId": "p1",
            "name": "Minimal",
            "location": { "lat": 0.0, "lng": 0.0 },
        }))
        .await;

    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert!(resp["address"].is_null());
    assert!(resp["types"].is_null());
}

#[tokio::test]
async fn test_create_history_place_missing_name() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .create_with_body(json!({
            "placeId": "p1",
            "location": { "lat": 4.711, "lng": -74.0721 },
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0014");
}

#[tokio::test]
async fn test_create_history_place_empty_place_id() {
    let context = TestContext::new(None).await;

    let resp = context.api.history_places.create("", "Empty id").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0014");
}

#[tokio::test]
async fn test_create_history_place_blank_name() {
    let context = TestContext::new(None).await;

    let resp = context.api.history_places.create("p1", "   ").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
}

#[tokio::test]
async fn test_create_history_place_invalid_location() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .create_with_body(json!({
            "placeId": "p1",
            "name": "Off the map",
            "location": { "lat": 123.0, "lng": -74.0721 },
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
}

#[tokio::test]
async fn test_create_history_place_unknown_field() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .history_places
        .create_with_body(json!({
            "placeId": "p1",
            "name": "Extra",
            "location": { "lat": 4.711, "lng": -74.0721 },
            "userId": "someone-else",
        }))
        .await;

    assert_eq!(resp.status(), 400);
}
