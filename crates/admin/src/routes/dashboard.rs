//! Dashboard route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{middleware::RequireAdminAuth, services::DashboardMetrics, state::AppState};

/// GET /api/dashboard
#[instrument(skip_all, fields(admin = %admin.email))]
pub async fn show(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<DashboardMetrics> {
    Json(DashboardMetrics::compute(state.orders()))
}
