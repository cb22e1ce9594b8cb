//! Product management route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    middleware::RequireAdminAuth,
    services::{ProductRow, products},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    #[serde(default)]
    pub search: String,
}

/// GET /api/products?search=
#[instrument(skip(_admin, state))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<ProductRow>> {
    Json(products::search(state.catalog(), &query.search))
}
