//! Checkout route handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::routes::cart::CART_UPDATED_EVENT;
use crate::services::{CartSession, CheckoutForm, CheckoutService, settle_cart};
use crate::state::AppState;

/// Place an order for everything in the cart.
///
/// POST /api/checkout
///
/// On success the ordered quantities are taken off the session cart and the
/// order confirmation is returned with `201 Created`. Anything the visitor
/// added while the order was processing stays in the cart.
#[instrument(skip(state, session, form), fields(payment_method = ?form.payment_method))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CheckoutForm>,
) -> Result<impl IntoResponse> {
    let carts = CartSession::new(&session);
    let cart = carts.load().await?;

    let confirmation = CheckoutService::new(state.catalog(), state.config().delays.checkout)
        .place_order(&cart, form)
        .await?;

    carts
        .update(|current| settle_cart(current, &cart))
        .await?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        Json(confirmation),
    ))
}
