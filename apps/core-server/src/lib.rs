use std::net::IpAddr;

use secrecy::SecretString;
use serde::Deserialize;

pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod router;
pub mod serialize;
mod middleware;

#[derive(Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    /// HS256 secret the bearer tokens are signed with
    #[serde(deserialize_with = "foodie_core::mapper::secret_string::deserialize")]
    pub jwt_secret: SecretString,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            server_ip: None,
            server_port: None,
            jwt_secret: SecretString::from(""),
            trace_json: None,
            trace_level: None,
            hide_error_response_cause: false,
            enable_metrics: true,
            enable_server_info: true,
            enable_open_api: true,
        }
    }
}
