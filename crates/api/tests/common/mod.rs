#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use learndsa_db::PoolSettings;
use sqlx::PgPool;
use tower::ServiceExt;

use learndsa_api::app::build_router;
use learndsa_api::auth::identity_token::{issue_identity_token, IdentityClaims, IdentityTokenConfig};
use learndsa_api::config::ServerConfig;
use learndsa_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and no issuer check on identity tokens.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        health_check_timeout_secs: 5,
        pool: PoolSettings::default(),
        identity: IdentityTokenConfig {
            secret: TEST_SECRET.to_string(),
            issuer: None,
        },
    }
}

/// Build the full application router, with every middleware layer, over the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Claims for a signed-in user with the given email and a one-hour expiry.
pub fn claims_for(email: Option<&str>, name: Option<&str>) -> IdentityClaims {
    let now = chrono::Utc::now().timestamp();
    IdentityClaims {
        sub: format!("test|{}", email.unwrap_or("anonymous")),
        email: email.map(str::to_string),
        name: name.map(str::to_string),
        picture: None,
        iss: None,
        exp: now + 3600,
        iat: now,
    }
}

/// Sign `claims` with the test secret.
pub fn token_for(claims: &IdentityClaims) -> String {
    issue_identity_token(claims, &test_config().identity).expect("test token should sign")
}

/// Shorthand: a bearer token for `email` with no display name.
pub fn token(email: &str) -> String {
    token_for(&claims_for(Some(email), None))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

/// Send a POST request with a bearer token and a JSON body.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
