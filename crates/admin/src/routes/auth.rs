//! Admin authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use bitewala_core::User;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::services::{AdminAuthError, AdminAuthService};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login outcome. Refusals carry a reason instead of an error status.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/auth/login
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<LoginResponse>> {
    let service = AdminAuthService::new(state.credentials(), state.config().login_delay);

    match service.login(&form.email, &form.password).await {
        Ok(admin) => {
            session.cycle_id().await?;
            set_current_admin(&session, &admin).await?;

            tracing::info!(admin_id = %admin.id, "Admin logged in");
            Ok(Json(LoginResponse {
                success: true,
                user: Some(admin),
                error: None,
            }))
        }
        Err(e) => {
            if e == AdminAuthError::NotAdmin {
                tracing::warn!("Non-admin account attempted admin login");
            }
            Ok(Json(LoginResponse {
                success: false,
                user: None,
                error: Some(e.to_string()),
            }))
        }
    }
}

/// POST /api/auth/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_admin(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}
