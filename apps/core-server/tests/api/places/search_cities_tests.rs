use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_search_cities_by_term() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .city_autocomplete("Medellín, Colombia", "city-mde")
        .await;

    // WHEN
    let resp = context
        .api
        .places
        .search_cities(Some("Medellín, Colombia"))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await,
        json!([{
            "cityId": "city-mde",
            "name": "Medellín",
            "country": "Colombia",
            "fullName": "Medellín, Colombia",
        }])
    );
}

#[tokio::test]
async fn test_search_cities_without_term_returns_default_cities() {
    // GIVEN
    let context = TestContext::new(None).await;
    for (city, id) in [
        ("Cartagena, Colombia", "city-ctg"),
        ("Bogotá, Colombia", "city-bog"),
        ("Medellín, Colombia", "city-mde"),
    ] {
        context.server_mock.city_autocomplete(city, id).await;
    }

    // WHEN
    let resp = context.api.places.search_cities(None).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let ids: Vec<&str> = resp
        .as_array()
        .unwrap()
        .iter()
        .map(|city| city["cityId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["city-ctg", "city-bog", "city-mde"]);
    assert_eq!(resp[1]["name"], "Bogotá");
}

#[tokio::test]
async fn test_search_cities_provider_failure() {
    // GIVEN
    let context = TestContext::new(None).await;
    context
        .server_mock
        .city_autocomplete_status("Cali", "OVER_QUERY_LIMIT")
        .await;

    // WHEN
    let resp = context.api.places.search_cities(Some("Cali")).await;

    // THEN
    assert_eq!(resp.status(), 502);
    assert_eq!(resp.json_value().await["code"], "BR_0010");
}
