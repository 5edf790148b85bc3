//! Shared helpers for the end-to-end suites: an app wired to an in-memory
//! store, plus request plumbing.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use atelier_server::api;
use atelier_server::auth::JwtConfig;
use atelier_server::core::{Config, PaymentProviderConfig, ServerState};

pub const PAYMENT_KEY_ID: &str = "key_test_123";
pub const PAYMENT_KEY_SECRET: &str = "test-payment-shared-secret";

pub fn test_config() -> Config {
    Config {
        data_dir: String::new(),
        db_namespace: "atelier".to_string(),
        db_name: "test".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-32-bytes!".to_string(),
            expiration_minutes: 30,
            issuer: "atelier-server".to_string(),
        },
        payment: PaymentProviderConfig {
            key_id: PAYMENT_KEY_ID.to_string(),
            key_secret: PAYMENT_KEY_SECRET.to_string(),
        },
        environment: "test".to_string(),
    }
}

/// Fresh app over an empty in-memory store
pub async fn test_app() -> Router {
    let config = test_config();
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("failed to initialize in-memory state");
    api::build_app(&state)
}

/// Send one request and decode the JSON response body (empty bodies
/// decode to Null).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Register a user with the given role and return a bearer token for them.
pub async fn register_and_login(app: &Router, email: &str, role: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "full_name": "Test User",
            "password": "a-long-password",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed for {email}");

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": "a-long-password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {email}");

    body["token"].as_str().expect("login returned no token").to_string()
}

/// Place an order of one line item (quantity 2) totalling `2 × unit_price`.
pub async fn place_order(app: &Router, token: &str, unit_price: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/orders",
        Some(token),
        Some(serde_json::json!({
            "items": [
                {
                    "product_id": "products:keychain1",
                    "quantity": 2,
                    "customization": {"text": "Asha", "font": "Arial", "color": "#FFD700"},
                    "price": unit_price,
                }
            ],
            "total_amount": unit_price * 2.0,
            "shipping_address": "42 Craft Lane, Pune",
            "contact_number": "+91-5550100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "order creation failed: {body}");
    body
}
