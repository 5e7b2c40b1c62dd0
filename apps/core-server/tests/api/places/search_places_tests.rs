use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

const SEARCH_FIELDS: &str = "formatted_address,geometry,type,rating,photo";

#[tokio::test]
async fn test_search_places_enriches_predictions() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .place_autocomplete(
            "Museo del Oro",
            json!([{
                "place_id": "museo-oro",
                "description": "Museo del Oro, Bogotá, Colombia",
                "structured_formatting": {
                    "main_text": "Museo del Oro",
                    "secondary_text": "Bogotá, Colombia",
                }
            }]),
        )
        .await;
    context
        .server_mock
        .place_details(
            "museo-oro",
            SEARCH_FIELDS,
            json!({
                "formatted_address": "Cra. 6 #15-88, Bogotá",
                "geometry": { "location": { "lat": 4.6019, "lng": -74.0721 } },
                "types": ["museum", "point_of_interest"],
                "rating": 4.8,
                "photos": [{ "photo_reference": "gold" }],
            }),
        )
        .await;

    // WHEN
    let resp = context.api.places.search_places(Some("Museo del Oro")).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await,
        json!([{
            "placeId": "museo-oro",
            "name": "Museo del Oro",
            "address": "Cra. 6 #15-88, Bogotá",
            "location": { "lat": 4.6019, "lng": -74.0721 },
            "types": ["museum", "point_of_interest"],
            "rating": 4.8,
            "photo": "https://photos.test/photo?maxwidth=400&photoreference=gold&key=test-key",
            "fullDescription": "Museo del Oro, Bogotá, Colombia",
        }])
    );
}

#[tokio::test]
async fn test_search_places_no_predictions() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .place_autocomplete("zzzz", json!([]))
        .await;

    // WHEN
    let resp = context.api.places.search_places(Some("zzzz")).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!([]));
}

#[tokio::test]
async fn test_search_places_requires_term() {
    let context = TestContext::new(None).await;

    let resp = context.api.places.search_places(None).await;

    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0006");
    assert_eq!(resp["message"], "Search term is required");
}

#[tokio::test]
async fn test_search_places_details_failure() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .place_autocomplete(
            "Parque",
            json!([{ "place_id": "parque", "description": "Parque, Cali" }]),
        )
        .await;
    context
        .server_mock
        .place_details_status("parque", SEARCH_FIELDS, "INVALID_REQUEST")
        .await;

    // WHEN
    let resp = context.api.places.search_places(Some("Parque")).await;

    // THEN
    assert_eq!(resp.status(), 502);
}
