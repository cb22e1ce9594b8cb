//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//!
//! # Auth
//! POST /api/auth/login           - Admin login (admin role only)
//! POST /api/auth/logout          - Logout
//!
//! # Requires admin session
//! GET  /api/dashboard            - Metrics and recent orders
//! GET  /api/orders               - Order list (?search=&status=)
//! GET  /api/orders/{id}          - Order detail
//! POST /api/orders/{id}/status   - Acknowledge a status change
//! GET  /api/products             - Product management list (?search=)
//! ```

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", post(orders::change_status))
}

/// Create all API routes for the admin console.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/dashboard", get(dashboard::show))
        .nest("/api/orders", order_routes())
        .route("/api/products", get(products::index))
}
