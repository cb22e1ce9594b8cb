//! Orders management route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use bitewala_core::{Order, OrderId, OrderStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::{AppError, Result},
    middleware::RequireAdminAuth,
    services::{OrderQuery, OrderRow, StatusChangeAck, StatusFilter},
    state::AppState,
};

/// Order list query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeForm {
    pub status: OrderStatus,
}

/// GET /api/orders?search=&status=
#[instrument(skip(_admin, state))]
pub async fn index(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<OrderRow>>> {
    let status = query
        .status
        .parse::<StatusFilter>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let query = OrderQuery {
        search: query.search,
        status,
    };
    Ok(Json(state.orders().list(&query).map(OrderRow::from).collect()))
}

/// GET /api/orders/{id}
#[instrument(skip(_admin, state))]
pub async fn show(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    state
        .orders()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}

/// POST /api/orders/{id}/status
///
/// Acknowledges the request; the order itself is not changed.
#[instrument(skip(admin, state), fields(admin = %admin.email))]
pub async fn change_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(form): Json<StatusChangeForm>,
) -> Result<Json<StatusChangeAck>> {
    state
        .orders()
        .acknowledge_status_change(&id, form.status)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}
