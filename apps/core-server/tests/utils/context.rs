use core_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::mock_server::MockServer;
use crate::fixtures;

pub const DEFAULT_USER: &str = "user-1";

pub struct TestContext {
    pub api: Client,
    pub server_mock: MockServer,
    base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new(additional_config: Option<String>) -> Self {
        let server_mock = MockServer::new().await;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(&server_mock.uri(), additional_config);
        let db = sql_data_provider::db_conn(config.app.database_url.as_str())
            .await
            .unwrap();
        let _handle = tokio::spawn(async move { start_server(listener, config, db).await });

        Self {
            api: Client::new(
                base_url.clone(),
                Some(fixtures::jwt::access_token(DEFAULT_USER)),
            ),
            server_mock,
            base_url,
            _handle,
        }
    }

    /// API client authenticated as `user_id`.
    pub fn api_as(&self, user_id: &str) -> Client {
        Client::new(
            self.base_url.clone(),
            Some(fixtures::jwt::access_token(user_id)),
        )
    }

    pub fn api_with_token(&self, token: Option<String>) -> Client {
        Client::new(self.base_url.clone(), token)
    }
}
