//! Integration tests for storefront mock login.

use bitewala_integration_tests::{TestServer, json};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_me_requires_login() {
    let server = TestServer::storefront().await;
    let resp = server.get("/api/auth/me").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_and_logout() {
    let server = TestServer::storefront().await;

    let login = server.login("user@example.com", "user123").await;
    assert_eq!(login["success"], true);
    assert_eq!(login["user"]["email"], "user@example.com");
    assert_eq!(login["user"]["role"], "user");
    assert!(login["user"].get("password").is_none());

    let resp = server.get("/api/auth/me").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["name"], "Test User");

    let resp = server.post("/api/auth/logout").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = server.get("/api/auth/me").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_can_shop() {
    let server = TestServer::storefront().await;

    let login = server.login("admin@bitewala.com", "admin123").await;
    assert_eq!(login["success"], true);
    assert_eq!(login["user"]["role"], "admin");
}

#[tokio::test]
async fn test_wrong_password_is_not_an_error() {
    let server = TestServer::storefront().await;

    let resp = server
        .post_json(
            "/api/auth/login",
            &json!({ "email": "user@example.com", "password": "wrong" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body, json!({ "success": false }));

    let resp = server.get("/api/auth/me").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_credentials_rejected() {
    let server = TestServer::storefront().await;
    let login = server.login("", "").await;
    assert_eq!(login["success"], false);
}

#[tokio::test]
async fn test_cart_survives_login_and_logout() {
    let server = TestServer::storefront().await;

    server
        .post_json("/api/cart/add", &json!({ "product_id": "6", "quantity": 2 }))
        .await;
    server.login("user@example.com", "user123").await;

    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 2);

    server.post("/api/auth/logout").await;
    let count = json(server.get("/api/cart/count").await).await;
    assert_eq!(count["count"], 2);
}
