//! End-to-end order/payment consistency flow
//!
//! Drives the real router over an in-memory store: create order → create
//! payment intent → signed provider callback → confirmed order.

mod common;

use common::{PAYMENT_KEY_ID, PAYMENT_KEY_SECRET, place_order, register_and_login, send, test_app};
use http::StatusCode;
use serde_json::json;

use atelier_server::payments::signature;

#[tokio::test]
async fn full_payment_flow_confirms_order() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    // Order of 2 × 250.00 = 500.00
    let order = place_order(&app, &token, 250.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["payment_status"], "pending");
    assert_eq!(order["total_amount"], 500.0);

    // Create the payment intent
    let (status, intent) = send(
        &app,
        "POST",
        "/api/payments/create",
        Some(&token),
        Some(json!({"order_id": order_id, "amount": 500.0, "currency": "INR"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "intent failed: {intent}");
    let provider_order_ref = intent["provider_order_ref"].as_str().unwrap().to_string();
    assert_eq!(provider_order_ref, format!("order_{order_id}"));
    assert_eq!(intent["amount"], 500.0);
    assert_eq!(intent["currency"], "INR");
    assert_eq!(intent["key_id"], PAYMENT_KEY_ID);

    // Provider callback with a correctly computed signature (no bearer)
    let sig = signature::compute(PAYMENT_KEY_SECRET, &provider_order_ref, "pay_test_1");
    let (status, body) = send(
        &app,
        "POST",
        "/api/payments/verify",
        None,
        Some(json!({
            "provider_order_ref": provider_order_ref,
            "provider_payment_ref": "pay_test_1",
            "signature": sig,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "verify failed: {body}");
    assert_eq!(body["success"], true);

    // Order is confirmed and paid
    let (status, order) = send(&app, "GET", &format!("/api/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "confirmed");
    assert_eq!(order["payment_status"], "completed");

    // Payment record reached its terminal status
    let (status, payment) = send(
        &app,
        "GET",
        &format!("/api/payments/order/{order_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "completed");
    assert_eq!(payment["amount"], 500.0);
    assert_eq!(payment["order_id"], order_id);
}

#[tokio::test]
async fn tampered_signature_is_rejected_and_order_stays_pending() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let order = place_order(&app, &token, 250.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/api/payments/create",
        Some(&token),
        Some(json!({"order_id": order_id, "amount": 500.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let provider_order_ref = format!("order_{order_id}");
    let mut sig = signature::compute(PAYMENT_KEY_SECRET, &provider_order_ref, "pay_test_1");
    // Flip one hex digit
    let last = sig.pop().unwrap();
    sig.push(if last == '0' { '1' } else { '0' });

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments/verify",
        None,
        Some(json!({
            "provider_order_ref": provider_order_ref,
            "provider_payment_ref": "pay_test_1",
            "signature": sig,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_signature");

    let (_, order) = send(&app, "GET", &format!("/api/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["payment_status"], "pending");
}

#[tokio::test]
async fn second_intent_for_same_order_conflicts() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let order = place_order(&app, &token, 100.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let intent_body = json!({"order_id": order_id, "amount": 200.0});
    let (status, _) = send(&app, "POST", "/api/payments/create", Some(&token), Some(intent_body.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/payments/create", Some(&token), Some(intent_body)).await;
    assert_eq!(status, StatusCode::CONFLICT, "second intent must conflict: {body}");

    // Still exactly one payment on record
    let (status, payment) = send(
        &app,
        "GET",
        &format!("/api/payments/order/{order_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "created");
}

#[tokio::test]
async fn duplicate_callback_is_a_noop() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let order = place_order(&app, &token, 75.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let (_, _) = send(
        &app,
        "POST",
        "/api/payments/create",
        Some(&token),
        Some(json!({"order_id": order_id, "amount": 150.0})),
    )
    .await;

    let provider_order_ref = format!("order_{order_id}");
    let sig = signature::compute(PAYMENT_KEY_SECRET, &provider_order_ref, "pay_dup");
    let callback = json!({
        "provider_order_ref": provider_order_ref,
        "provider_payment_ref": "pay_dup",
        "signature": sig,
    });

    let (status, _) = send(&app, "POST", "/api/payments/verify", None, Some(callback.clone())).await;
    assert_eq!(status, StatusCode::OK);

    // Replayed callback verifies again and changes nothing
    let (status, body) = send(&app, "POST", "/api/payments/verify", None, Some(callback)).await;
    assert_eq!(status, StatusCode::OK, "replay must no-op: {body}");

    let (_, order) = send(&app, "GET", &format!("/api/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(order["status"], "confirmed");
    assert_eq!(order["payment_status"], "completed");
}

#[tokio::test]
async fn callback_for_unknown_order_is_not_found() {
    let app = test_app().await;

    let provider_order_ref = "order_orders:doesnotexist";
    let sig = signature::compute(PAYMENT_KEY_SECRET, provider_order_ref, "pay_x");
    let (status, _) = send(
        &app,
        "POST",
        "/api/payments/verify",
        None,
        Some(json!({
            "provider_order_ref": provider_order_ref,
            "provider_payment_ref": "pay_x",
            "signature": sig,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn intent_for_unknown_order_is_not_found() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/payments/create",
        Some(&token),
        Some(json!({"order_id": "orders:missing", "amount": 10.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_total_must_match_line_items() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "items": [{"product_id": "products:p1", "quantity": 2, "price": 250.0}],
            "total_amount": 499.0,
            "shipping_address": "42 Craft Lane",
            "contact_number": "5550100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn order_requires_items() {
    let app = test_app().await;
    let token = register_and_login(&app, "maker@example.com", "user").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "items": [],
            "total_amount": 0.0,
            "shipping_address": "42 Craft Lane",
            "contact_number": "5550100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_empty_patch_keeps_fields_but_advances_updated_at() {
    let app = test_app().await;
    let user_token = register_and_login(&app, "maker@example.com", "user").await;
    let admin_token = register_and_login(&app, "boss@example.com", "admin").await;

    let order = place_order(&app, &user_token, 50.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();
    let created_updated_at = order["updated_at"].as_i64().unwrap();

    // Make sure the clock moves between create and patch
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let (status, patched) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}"),
        Some(&admin_token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "pending");
    assert!(patched["tracking_number"].is_null());
    assert!(patched["updated_at"].as_i64().unwrap() > created_updated_at);
}

#[tokio::test]
async fn admin_patch_sets_status_and_keeps_unset_fields() {
    let app = test_app().await;
    let user_token = register_and_login(&app, "maker@example.com", "user").await;
    let admin_token = register_and_login(&app, "boss@example.com", "admin").await;

    let order = place_order(&app, &user_token, 50.0).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, patched) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}"),
        Some(&admin_token),
        Some(json!({"status": "shipped", "tracking_number": "TRK-001"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "shipped");
    assert_eq!(patched["tracking_number"], "TRK-001");

    // A later status-only patch leaves the tracking number alone
    let (status, patched) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}"),
        Some(&admin_token),
        Some(json!({"status": "delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "delivered");
    assert_eq!(patched["tracking_number"], "TRK-001");
}

#[tokio::test]
async fn admin_patch_on_missing_order_is_not_found() {
    let app = test_app().await;
    let admin_token = register_and_login(&app, "boss@example.com", "admin").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/orders/orders:missing",
        Some(&admin_token),
        Some(json!({"status": "shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
