use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{HttpClient, Response};

pub struct PlacesApi {
    client: HttpClient,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseParams<'a> {
    pub city: Option<&'a str>,
    pub place: Option<&'a str>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
struct SearchParams<'a> {
    search: Option<&'a str>,
}

impl PlacesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn browse(&self, params: BrowseParams<'_>) -> Response {
        let query = serde_qs::to_string(&params).unwrap();
        self.client
            .get(&format!("/v1/places/browser-places?{query}"))
            .await
    }

    pub async fn search_cities(&self, search: Option<&str>) -> Response {
        let query = serde_qs::to_string(&SearchParams { search }).unwrap();
        self.client.get(&format!("/v1/places/search?{query}")).await
    }

    pub async fn search_places(&self, search: Option<&str>) -> Response {
        let query = serde_qs::to_string(&SearchParams { search }).unwrap();
        self.client
            .get(&format!("/v1/places/search-places?{query}"))
            .await
    }

    pub async fn top_restaurants(&self) -> Response {
        self.client.get("/v1/places/top-restaurants").await
    }

    pub async fn search_restaurant(&self, search: &str) -> Response {
        let query = serde_qs::to_string(&SearchParams {
            search: Some(search),
        })
        .unwrap();
        self.client
            .get(&format!("/v1/places/search-restaurant?{query}"))
            .await
    }
}
