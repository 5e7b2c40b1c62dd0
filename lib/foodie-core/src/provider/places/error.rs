use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum PlacesProviderError {
    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("Invalid provider URL: `{0}`")]
    Url(#[from] url::ParseError),
    #[error("Provider returned status `{status}`: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: String,
        message: Option<String>,
    },
    #[error("Provider returned no result")]
    MissingResult,
    #[error("Place `{0}` has no geometry")]
    MissingGeometry(String),
}
