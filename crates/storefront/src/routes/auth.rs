//! Authentication route handlers.
//!
//! A wrong password is not an error response: login answers
//! `{"success": false}` and leaves the session untouched.

use axum::{Json, extract::State, http::StatusCode};
use bitewala_core::User;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::services::AuthService;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login outcome.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Handle login.
///
/// POST /api/auth/login
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(state.credentials(), state.config().delays.login);

    match service.login(&form.email, &form.password).await {
        Ok(user) => {
            // Prevent session fixation
            session.cycle_id().await?;
            set_current_user(&session, &user).await?;
            set_sentry_user(&user.id, Some(user.email.as_str()));

            tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
            Ok(Json(LoginResponse {
                success: true,
                user: Some(user),
            }))
        }
        Err(e) => {
            tracing::info!(error = %e, "Login rejected");
            Ok(Json(LoginResponse {
                success: false,
                user: None,
            }))
        }
    }
}

/// Handle logout.
///
/// POST /api/auth/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The signed-in user.
///
/// GET /api/auth/me
pub async fn me(RequireAuth(user): RequireAuth) -> Json<User> {
    Json(user)
}
