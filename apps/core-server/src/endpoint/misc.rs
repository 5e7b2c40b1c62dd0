use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foodie_core::FoodieCore;
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics::encode_metrics;

#[derive(Serialize, ToSchema)]
pub(crate) struct BuildInfoRestDTO {
    #[schema(example = "foodie-core")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok", body = BuildInfoRestDTO)
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information for the service.",
)]
pub(crate) async fn get_build_info() -> Json<BuildInfoRestDTO> {
    let version = FoodieCore::version();

    Json(BuildInfoRestDTO {
        name: version.name,
        version: version.version,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Internal error")
    ),
    tag = "other",
    summary = "Retrieve metrics",
    description = "Returns system metrics.",
)]
pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {:?}", error),
        )
            .into_response(),
    }
}
