//! Integration tests for Bitewala.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bitewala-integration-tests
//! ```
//!
//! Nothing needs to be running beforehand: each test spawns the storefront
//! or admin router on an ephemeral localhost port and talks to it over HTTP
//! with a cookie-carrying client, so sessions behave as they do in a browser.
//!
//! # Test Categories
//!
//! - `storefront_*` - Storefront API tests
//! - `admin_*` - Admin API tests

use axum::Router;
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::net::TcpListener;

/// A router served on localhost plus a client holding one visitor's cookies.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Serve the storefront with the built-in catalog and no artificial latency.
    pub async fn storefront() -> Self {
        let state = bitewala_storefront::state::AppState::new(
            bitewala_storefront::config::StorefrontConfig::local(),
        );
        Self::spawn(bitewala_storefront::app(state)).await
    }

    /// Serve the admin console with the demo order book.
    pub async fn admin() -> Self {
        let state =
            bitewala_admin::state::AppState::new(bitewala_admin::config::AdminConfig::local());
        Self::spawn(bitewala_admin::app(state)).await
    }

    /// Serve `router` on an ephemeral port.
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: new_client(),
        }
    }

    /// Another visitor on the same server, with an empty cookie jar.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: new_client(),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post(&self, path: &str) -> Response {
        self.client
            .post(self.url(path))
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Log in and return the parsed login response.
    pub async fn login(&self, email: &str, password: &str) -> Value {
        let resp = self
            .post_json(
                "/api/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        json(resp).await
    }
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Parse a response body as JSON.
pub async fn json(resp: Response) -> Value {
    resp.json().await.expect("Response body was not JSON")
}
