use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use time::{Duration, OffsetDateTime};

use super::JWT_SECRET;

pub fn access_token(user_id: &str) -> String {
    let expires_at = OffsetDateTime::now_utc() + Duration::hours(1);

    sign(json!({
        "sub": user_id,
        "exp": expires_at.unix_timestamp(),
    }))
}

pub fn expired_access_token(user_id: &str) -> String {
    let expired_at = OffsetDateTime::now_utc() - Duration::hours(1);

    sign(json!({
        "sub": user_id,
        "exp": expired_at.unix_timestamp(),
    }))
}

pub fn access_token_signed_with(user_id: &str, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": user_id }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn sign(claims: serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
