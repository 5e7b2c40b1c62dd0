use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::api_clients::places::BrowseParams;
use crate::utils::context::TestContext;
use crate::utils::mock_server::nearby_place;

#[tokio::test]
async fn test_browse_places_by_coordinates_first_page() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .nearby_first_page(
            "4.711,-74.0721",
            vec![nearby_place("p1", Some(4.5)), nearby_place("p2", None)],
            Some("t1"),
            1,
        )
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("@4.711@-74.0721"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["pageNo"], 1);
    assert_eq!(resp["pageSize"], 60);
    assert_eq!(resp["totalResults"], 2);
    assert_eq!(resp["totalPages"], 1);

    let first = &resp["items"][0];
    assert_eq!(first["placeId"], "p1");
    assert_eq!(first["name"], "Restaurant p1");
    assert_eq!(first["address"], "Street p1");
    assert_eq!(first["location"], json!({ "lat": 10.42, "lng": -75.54 }));
    assert_eq!(first["rating"], 4.5);
    assert_eq!(
        first["photo"],
        "https://photos.test/photo?maxwidth=400&photoreference=photo-p1&key=test-key"
    );
    assert_eq!(first["types"], json!(["restaurant", "food"]));
    assert!(resp["items"][1]["rating"].is_null());
}

#[tokio::test]
async fn test_browse_places_follows_page_tokens_and_deduplicates() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .nearby_first_page(
            "4.711,-74.0721",
            vec![nearby_place("p1", Some(4.1)), nearby_place("p2", Some(4.2))],
            Some("t1"),
            1,
        )
        .await;
    context
        .server_mock
        .nearby_next_page(
            "t1",
            vec![nearby_place("p2", Some(4.2)), nearby_place("p3", Some(4.3))],
            None,
            1,
        )
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("@4.711@-74.0721"),
            page_no: Some(2),
            page_size: Some(2),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["pageNo"], 2);
    assert_eq!(resp["pageSize"], 2);
    assert_eq!(resp["totalResults"], 3);
    assert_eq!(resp["totalPages"], 2);
    let items = resp["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["placeId"], "p3");
}

#[tokio::test]
async fn test_browse_places_stops_when_tokens_run_out() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .nearby_first_page(
            "4.711,-74.0721",
            vec![nearby_place("p1", Some(4.1))],
            None,
            1,
        )
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("@4.711@-74.0721"),
            page_no: Some(3),
            page_size: Some(10),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["pageNo"], 3);
    assert_eq!(resp["totalResults"], 1);
    assert_eq!(resp["totalPages"], 1);
    assert_eq!(resp["items"], json!([]));
}

#[tokio::test]
async fn test_browse_places_by_city_name() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .city_autocomplete("Cartagena, Colombia", "city-ctg")
        .await;
    context
        .server_mock
        .city_geometry("city-ctg", 10.4, -75.5)
        .await;
    context
        .server_mock
        .nearby_first_page("10.4,-75.5", vec![nearby_place("p1", Some(4.7))], None, 1)
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("Cartagena, Colombia"),
            place: Some("ceviche"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["totalResults"], 1);
    assert_eq!(resp["items"][0]["placeId"], "p1");
}

#[tokio::test]
async fn test_browse_places_missing_city() {
    let context = TestContext::new(None).await;

    let resp = context.api.places.browse(BrowseParams::default()).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0014");
}

#[tokio::test]
async fn test_browse_places_blank_city() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("   "),
            ..Default::default()
        })
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0006");
}

#[tokio::test]
async fn test_browse_places_invalid_coordinates() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("@abc@-74.0721"),
            ..Default::default()
        })
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0007");
}

#[tokio::test]
async fn test_browse_places_unknown_city() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .city_autocomplete_status("Atlantis", "ZERO_RESULTS")
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("Atlantis"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_browse_places_provider_denied() {
    // GIVEN
    let context = TestContext::new(None).await;
    context.server_mock.nearby_search_denied().await;

    // WHEN
    let resp = context
        .api
        .places
        .browse(BrowseParams {
            city: Some("@4.711@-74.0721"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 502);
    assert_eq!(resp.json_value().await["code"], "BR_0010");
}
