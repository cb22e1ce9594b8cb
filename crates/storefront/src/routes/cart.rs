//! Cart route handlers.
//!
//! Every mutation writes the cart back to the session before responding and
//! sets `HX-Trigger: cart-updated` so listeners (the header badge) refresh.

use axum::{
    Json,
    extract::State,
    response::{AppendHeaders, IntoResponse},
};
use bitewala_core::{Cart, CartTotals, Catalog, Price, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::CartSession;
use crate::state::AppState;

/// Event name announced after every cart mutation.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// One cart line joined with its catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub variant: String,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub totals: CartTotals,
}

impl CartView {
    /// Join the stored lines with the catalog and derive totals.
    ///
    /// Lines whose product the catalog no longer carries are not shown and
    /// do not count toward `item_count`.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &Catalog) -> Self {
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(&line.product_id).map(|product| CartItemView {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    variant: product.variant.clone(),
                    image: product.image.clone(),
                    unit_price: product.price,
                    quantity: line.quantity,
                    line_total: product.price.times(line.quantity),
                })
            })
            .collect();

        let summary = cart.summary(catalog);
        Self {
            items,
            item_count: summary.item_count,
            totals: summary.totals,
        }
    }
}

/// Badge count response.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u64,
}

// =============================================================================
// Form Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    /// Defaults to one; anything below one is raised to one.
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    /// Zero removes the line.
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

fn updated(view: CartView) -> impl IntoResponse {
    (
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        Json(view),
    )
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Show the cart.
///
/// GET /api/cart
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = CartSession::new(&session).load().await?;
    Ok(Json(CartView::build(&cart, state.catalog())))
}

/// Add a product to the cart.
///
/// POST /api/cart/add
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AddToCartForm>,
) -> Result<impl IntoResponse> {
    if state.catalog().get(&form.product_id).is_none() {
        return Err(AppError::NotFound(format!("product {}", form.product_id)));
    }
    let quantity = form.quantity.unwrap_or(1).max(1);

    let cart = CartSession::new(&session)
        .update(|cart| cart.add(form.product_id, quantity))
        .await?;

    tracing::debug!(items = cart.total_items(), "Added to cart");
    Ok(updated(CartView::build(&cart, state.catalog())))
}

/// Overwrite a line's quantity.
///
/// POST /api/cart/update
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<UpdateCartForm>,
) -> Result<impl IntoResponse> {
    let cart = CartSession::new(&session)
        .update(|cart| cart.set_quantity(&form.product_id, form.quantity))
        .await?;

    Ok(updated(CartView::build(&cart, state.catalog())))
}

/// Remove a line.
///
/// POST /api/cart/remove
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RemoveFromCartForm>,
) -> Result<impl IntoResponse> {
    let cart = CartSession::new(&session)
        .update(|cart| cart.remove(&form.product_id))
        .await?;

    Ok(updated(CartView::build(&cart, state.catalog())))
}

/// Empty the cart.
///
/// POST /api/cart/clear
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let cart = CartSession::new(&session).update(Cart::clear).await?;
    Ok(updated(CartView::build(&cart, state.catalog())))
}

/// Item count for the header badge.
///
/// GET /api/cart/count
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CartCount>> {
    let cart = CartSession::new(&session).load().await?;
    Ok(Json(CartCount {
        count: cart.priced_items(state.catalog()),
    }))
}
