use std::sync::Arc;
use std::time::Instant;

use axum::Extension;
use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::ServerConfig;
use crate::metrics::track_request_count_and_time;

/// Caller identity established by [`bearer_check`].
#[derive(Debug, Clone)]
pub struct Authorized {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
}

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

pub async fn bearer_check(
    Extension(config): Extension<Arc<ServerConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<axum::response::Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let auth_header = if let Some(auth_header) = auth_header {
        auth_header.to_owned()
    } else {
        tracing::warn!("Authorization header not found.");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let mut split = auth_header.split(' ');
    let auth_type = split.next().unwrap_or_default();
    let token = split.next().unwrap_or_default();

    if auth_type != "Bearer" || token.is_empty() {
        tracing::warn!("Could not authorize request. Incorrect authorization method or token.");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user_id = validate_access_token(token, config.jwt_secret.expose_secret())?;
    request.extensions_mut().insert(Authorized { user_id });

    Ok(next.run(request).await)
}

fn validate_access_token(token: &str, secret: &str) -> Result<String, StatusCode> {
    if secret.is_empty() {
        tracing::warn!("JWT secret not configured, rejecting bearer token.");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["sub"]);

    let claims = decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|error| {
        match error.kind() {
            ErrorKind::ExpiredSignature => tracing::warn!("Access token expired."),
            _ => tracing::warn!(%error, "Could not validate access token."),
        }
        StatusCode::UNAUTHORIZED
    })?
    .claims;

    if claims.sub.trim().is_empty() {
        tracing::warn!("Access token has an empty subject.");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(claims.sub)
}

impl<S> FromRequestParts<S> for Authorized
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Authorized>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> axum::response::Response {
    let start = Instant::now();
    let response = next.run(request).await;
    track_request_count_and_time(start.elapsed().as_secs_f64());
    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let session_id = headers
        .get("x-session-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        session_id,
    }
}
