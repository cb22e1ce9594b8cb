//! Integration tests for checkout and the contact form.

use bitewala_integration_tests::{TestServer, json};
use bitewala_storefront::services::contact::THANK_YOU_MESSAGE;
use reqwest::StatusCode;
use serde_json::{Value, json};

fn checkout_form() -> Value {
    json!({
        "name": "Anjali Mehta",
        "email": "anjali@example.com",
        "phone": "+91 9988776655",
        "address": "14 Lake View Road",
        "city": "Pune",
        "state": "Maharashtra",
        "pincode": "411001",
        "payment_method": "cod"
    })
}

#[tokio::test]
async fn test_checkout_places_order_and_clears_cart() {
    let server = TestServer::storefront().await;
    server
        .post_json("/api/cart/add", &json!({ "product_id": "1", "quantity": 2 }))
        .await;
    server
        .post_json("/api/cart/add", &json!({ "product_id": "3" }))
        .await;

    let resp = server.post_json("/api/checkout", &checkout_form()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get("hx-trigger").map(|v| v.as_bytes()),
        Some(&b"cart-updated"[..])
    );

    let body = json(resp).await;
    let order = &body["order"];
    assert!(order["id"].as_str().is_some_and(|id| id.starts_with("ORD-")));
    assert_eq!(order["status"], "pending");
    assert_eq!(order["payment"]["method"], "cod");
    assert_eq!(order["payment"]["status"], "pending");
    assert_eq!(order["customer"]["name"], "Anjali Mehta");
    assert_eq!(order["shipping"]["zip"], "411001");
    assert_eq!(order["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(order["total_amount"], 340);
    assert_eq!(body["totals"]["total"], order["total_amount"]);

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart() {
    let server = TestServer::storefront().await;

    let resp = server.post_json("/api/checkout", &checkout_form()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_validation_keeps_cart() {
    let server = TestServer::storefront().await;
    server
        .post_json("/api/cart/add", &json!({ "product_id": "4", "quantity": 3 }))
        .await;

    let mut form = checkout_form();
    form["pincode"] = json!("  ");
    let resp = server.post_json("/api/checkout", &form).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.is_ok_and(|text| text.contains("pincode")));

    let mut form = checkout_form();
    form["email"] = json!("not-an-email");
    let resp = server.post_json("/api/checkout", &form).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 3);
}

#[tokio::test]
async fn test_checkout_online_payment() {
    let server = TestServer::storefront().await;
    server
        .post_json("/api/cart/add", &json!({ "product_id": "5" }))
        .await;

    let mut form = checkout_form();
    form["payment_method"] = json!("online");
    let body = json(server.post_json("/api/checkout", &form).await).await;
    assert_eq!(body["order"]["payment"]["method"], "online");
    // 599 + 49 + round(107.82)
    assert_eq!(body["order"]["total_amount"], 756);
}

#[tokio::test]
async fn test_contact_submission() {
    let server = TestServer::storefront().await;

    let resp = server
        .post_json(
            "/api/contact",
            &json!({
                "name": "Rohan",
                "email": "rohan@example.com",
                "message": "Do you ship to Goa?"
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json(resp).await,
        json!({ "success": true, "message": THANK_YOU_MESSAGE })
    );
}

#[tokio::test]
async fn test_contact_requires_message() {
    let server = TestServer::storefront().await;

    let resp = server
        .post_json(
            "/api/contact",
            &json!({ "name": "Rohan", "email": "rohan@example.com", "message": "" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
