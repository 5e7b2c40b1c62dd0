use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::history_places::HistoryPlacesApi;
use self::other::OtherApi;
use self::places::PlacesApi;

pub mod history_places;
pub mod other;
pub mod places;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{url}", self.base_url);
        let request = http_client().request(method, url);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn put(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let resp = self
            .request(reqwest::Method::PUT, url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn delete(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }
}

pub struct Client {
    pub places: PlacesApi,
    pub history_places: HistoryPlacesApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let client = HttpClient { base_url, token };

        Self {
            places: PlacesApi::new(client.clone()),
            history_places: HistoryPlacesApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
