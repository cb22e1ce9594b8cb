//! Integration tests for the session cart.

use bitewala_core::{Cart, Catalog, Price, ProductId};
use bitewala_integration_tests::{TestServer, json};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_new_visitor_has_empty_cart() {
    let server = TestServer::storefront().await;

    let cart = json(server.get("/api/cart").await).await;
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["item_count"], 0);
    assert_eq!(
        cart["totals"],
        json!({ "subtotal": 0, "shipping": 49, "tax": 0, "total": 49 })
    );

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_add_announces_update_and_persists() {
    let server = TestServer::storefront().await;

    let resp = server
        .post_json("/api/cart/add", &json!({ "product_id": "1", "quantity": 2 }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("hx-trigger").map(|v| v.as_bytes()),
        Some(&b"cart-updated"[..])
    );
    let cart = json(resp).await;
    assert_eq!(cart["item_count"], 2);

    server
        .post_json("/api/cart/add", &json!({ "product_id": "3" }))
        .await;

    // A fresh request sees what the previous ones wrote
    let cart = json(server.get("/api/cart").await).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(cart["items"][0]["product_id"], "1");
    assert_eq!(cart["items"][0]["line_total"], 198);
    assert_eq!(cart["items"][1]["product_id"], "3");
    assert_eq!(
        cart["totals"],
        json!({ "subtotal": 247, "shipping": 49, "tax": 44, "total": 340 })
    );

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 3);
}

#[tokio::test]
async fn test_adding_same_product_merges_lines() {
    let server = TestServer::storefront().await;

    for quantity in [1, 2] {
        server
            .post_json("/api/cart/add", &json!({ "product_id": "2", "quantity": quantity }))
            .await;
    }

    let cart = json(server.get("/api/cart").await).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["items"][0]["quantity"], 3);
}

#[tokio::test]
async fn test_add_zero_quantity_counts_as_one() {
    let server = TestServer::storefront().await;

    let cart = json(
        server
            .post_json("/api/cart/add", &json!({ "product_id": "4", "quantity": 0 }))
            .await,
    )
    .await;
    assert_eq!(cart["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let server = TestServer::storefront().await;

    let resp = server
        .post_json("/api/cart/add", &json!({ "product_id": "99" }))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_update_remove_and_clear() {
    let server = TestServer::storefront().await;
    for id in ["1", "2", "3"] {
        server
            .post_json("/api/cart/add", &json!({ "product_id": id }))
            .await;
    }

    let cart = json(
        server
            .post_json("/api/cart/update", &json!({ "product_id": "1", "quantity": 5 }))
            .await,
    )
    .await;
    assert_eq!(cart["items"][0]["quantity"], 5);
    assert_eq!(cart["item_count"], 7);

    // Zero removes the line rather than storing it
    let cart = json(
        server
            .post_json("/api/cart/update", &json!({ "product_id": "1", "quantity": 0 }))
            .await,
    )
    .await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(2));

    let cart = json(
        server
            .post_json("/api/cart/remove", &json!({ "product_id": "2" }))
            .await,
    )
    .await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["items"][0]["product_id"], "3");

    let resp = server.post("/api/cart/clear").await;
    assert!(resp.headers().contains_key("hx-trigger"));
    let cart = json(resp).await;
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["totals"]["total"], 49);
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let server = TestServer::storefront().await;
    let other = server.new_visitor();

    server
        .post_json("/api/cart/add", &json!({ "product_id": "5", "quantity": 2 }))
        .await;

    let count = json(other.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 0);
    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 2);
}

#[tokio::test]
async fn test_totals_match_ledger() {
    let server = TestServer::storefront().await;
    let catalog = Catalog::builtin();
    let mut expected = Cart::new();

    for (id, quantity) in [("5", 3), ("6", 1), ("2", 4)] {
        server
            .post_json("/api/cart/add", &json!({ "product_id": id, "quantity": quantity }))
            .await;
        expected.add(ProductId::new(id), quantity);
    }

    let cart = json(server.get("/api/cart").await).await;
    let total = expected.derived_total(&catalog);
    assert_eq!(total, Price::new(3_025));
    assert_eq!(cart["totals"]["total"], total.amount());
}
