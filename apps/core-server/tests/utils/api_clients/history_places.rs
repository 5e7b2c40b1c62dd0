use std::fmt::Display;

use serde_json::{Value, json};

use super::{HttpClient, Response};

pub struct HistoryPlacesApi {
    client: HttpClient,
}

impl HistoryPlacesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, place_id: &str, name: &str) -> Response {
        self.create_with_body(json!({
            "placeId": place_id,
            "name": name,
            "address": "Calle 10 # 5-20",
            "location": { "lat": 4.711, "lng": -74.0721 },
            "rating": 4.5,
            "types": ["restaurant", "food"],
        }))
        .await
    }

    pub async fn create_with_body(&self, body: Value) -> Response {
        self.client.post("/v1/history-places", body).await
    }

    pub async fn list(&self, page_no: Option<i64>, page_size: Option<i64>) -> Response {
        let mut query = vec![];
        if let Some(page_no) = page_no {
            query.push(format!("pageNo={page_no}"));
        }
        if let Some(page_size) = page_size {
            query.push(format!("pageSize={page_size}"));
        }

        self.client
            .get(&format!("/v1/history-places?{}", query.join("&")))
            .await
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        self.client.get(&format!("/v1/history-places/{id}")).await
    }

    pub async fn update(&self, id: &impl Display, body: Value) -> Response {
        self.client
            .put(&format!("/v1/history-places/{id}"), body)
            .await
    }

    pub async fn delete(&self, id: &impl Display) -> Response {
        self.client
            .delete(&format!("/v1/history-places/{id}"))
            .await
    }
}
