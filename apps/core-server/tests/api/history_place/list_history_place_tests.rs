use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::{DEFAULT_USER, TestContext};

#[tokio::test]
async fn test_list_history_places_paginated_newest_first() {
    // GIVEN
    let context = TestContext::new(None).await;
    let mut ids = vec![];
    for (place_id, name) in [("p1", "Uno"), ("p2", "Dos"), ("p3", "Tres")] {
        let created = context
            .api
            .history_places
            .create(place_id, name)
            .await
            .json_value()
            .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    context
        .api_as("user-2")
        .history_places
        .create("p4", "Ajeno")
        .await;

    context
        .api
        .history_places
        .update(&ids[0], json!({ "accessedAt": "2030-01-01T00:00:00Z" }))
        .await;
    context
        .api
        .history_places
        .update(&ids[2], json!({ "accessedAt": "2029-01-01T00:00:00Z" }))
        .await;

    // WHEN
    let first_page = context.api.history_places.list(Some(1), Some(2)).await;
    let second_page = context.api.history_places.list(Some(2), Some(2)).await;

    // THEN
    assert_eq!(first_page.status(), 200);
    let first_page = first_page.json_value().await;
    assert_eq!(first_page["total"], 3);
    assert_eq!(first_page["page"], 1);
    assert_eq!(first_page["totalPages"], 2);
    assert_eq!(first_page["hasNextPage"], true);
    assert_eq!(first_page["hasPreviousPage"], false);
    assert_eq!(first_page["values"][0]["id"], ids[0].as_str());
    assert_eq!(first_page["values"][1]["id"], ids[2].as_str());
    assert_eq!(first_page["values"][0]["userId"], DEFAULT_USER);

    assert_eq!(second_page.status(), 200);
    let second_page = second_page.json_value().await;
    assert_eq!(second_page["page"], 2);
    assert_eq!(second_page["hasNextPage"], false);
    assert_eq!(second_page["hasPreviousPage"], true);
    let values = second_page["values"].as_array().unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["id"], ids[1].as_str());
}

#[tokio::test]
async fn test_list_history_places_defaults() {
    let context = TestContext::new(None).await;
    context.api.history_places.create("p1", "Uno").await;

    let resp = context.api.history_places.list(None, None).await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["page"], 1);
    assert_eq!(resp["total"], 1);
    assert_eq!(resp["totalPages"], 1);
}

#[tokio::test]
async fn test_list_history_places_empty() {
    let context = TestContext::new(None).await;

    let resp = context.api.history_places.list(None, None).await;

    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["values"], json!([]));
    assert_eq!(resp["total"], 0);
    assert_eq!(resp["totalPages"], 0);
    assert_eq!(resp["hasNextPage"], false);
}

#[tokio::test]
async fn test_list_history_places_invalid_pagination() {
    let context = TestContext::new(None).await;

    let zero_page = context.api.history_places.list(Some(0), None).await;
    let negative_size = context.api.history_places.list(None, Some(-5)).await;

    assert_eq!(zero_page.status(), 400);
    assert_eq!(zero_page.json_value().await["code"], "BR_0005");
    assert_eq!(negative_size.status(), 400);
    assert_eq!(negative_size.json_value().await["code"], "BR_0005");
}
