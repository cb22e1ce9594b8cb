//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use bitewala_core::{Product, ProductFilter, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// One of `all`, `powder`, `ready`, `gift`.
    #[serde(default)]
    pub filter: Option<String>,
}

/// A filter tab and its caption.
#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub value: ProductFilter,
    pub label: &'static str,
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub filter: ProductFilter,
    pub filters: Vec<FilterOption>,
    pub products: Vec<Product>,
}

/// List products, optionally narrowed to one filter tab.
///
/// GET /api/products?filter=powder
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ProductListView>> {
    let filter = query
        .filter
        .as_deref()
        .unwrap_or_default()
        .parse::<ProductFilter>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let products = state.catalog().filter(filter).cloned().collect();

    Ok(Json(ProductListView {
        filter,
        filters: ProductFilter::ALL
            .into_iter()
            .map(|value| FilterOption {
                value,
                label: value.label(),
            })
            .collect(),
        products,
    }))
}

/// The products shown on the home page.
///
/// GET /api/products/featured
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().featured().to_vec())
}

/// Product detail.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(&ProductId::new(id.as_str()))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
