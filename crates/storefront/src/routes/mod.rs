//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /api/products           - Product listing (?filter=all|powder|ready|gift)
//! GET  /api/products/featured  - Home page products
//! GET  /api/products/{id}      - Product detail
//!
//! # Cart (each mutation sets HX-Trigger: cart-updated)
//! GET  /api/cart               - Cart lines and totals
//! POST /api/cart/add           - Add to cart
//! POST /api/cart/update        - Set a line's quantity
//! POST /api/cart/remove        - Remove a line
//! POST /api/cart/clear         - Empty the cart
//! GET  /api/cart/count         - Cart count badge
//!
//! # Checkout
//! POST /api/checkout           - Place an order
//!
//! # Auth
//! POST /api/auth/login         - Login action
//! POST /api/auth/logout        - Logout action
//! GET  /api/auth/me            - Current user (requires auth)
//!
//! # Contact
//! POST /api/contact            - Contact form
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/auth", auth_routes())
        .route("/api/checkout", post(checkout::place_order))
        .route("/api/contact", post(contact::submit))
}
