//! Integration tests for admin console access control.

use bitewala_integration_tests::{TestServer, json};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_is_public() {
    let server = TestServer::admin().await;

    let resp = server.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_console_requires_login() {
    let server = TestServer::admin().await;

    for path in ["/api/dashboard", "/api/orders", "/api/orders/ORD001", "/api/products"] {
        let resp = server.get(path).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_shopper_cannot_log_in() {
    let server = TestServer::admin().await;

    let login = server.login("user@example.com", "user123").await;
    assert_eq!(login["success"], false);
    assert_eq!(login["error"], "account does not have admin access");
    assert!(login.get("user").is_none());

    let resp = server.get("/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password() {
    let server = TestServer::admin().await;

    let login = server.login("admin@bitewala.com", "admin").await;
    assert_eq!(login["success"], false);
    assert_eq!(login["error"], "invalid credentials");
}

#[tokio::test]
async fn test_admin_login_and_logout() {
    let server = TestServer::admin().await;

    let login = server.login("admin@bitewala.com", "admin123").await;
    assert_eq!(login["success"], true);
    assert_eq!(login["user"]["role"], "admin");

    let resp = server.get("/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = server.post("/api/auth/logout").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = server.get("/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let server = TestServer::admin().await;
    server.login("admin@bitewala.com", "admin123").await;

    let stranger = server.new_visitor();
    let resp = stranger.get("/api/orders").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = server.get("/api/orders").await;
    assert_eq!(json(resp).await.as_array().map(Vec::len), Some(5));
}
