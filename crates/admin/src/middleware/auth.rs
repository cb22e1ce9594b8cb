//! Authentication extractor for admin.

use axum::{extract::FromRequestParts, http::request::Parts};
use bitewala_core::User;
use bitewala_core::sessions::read_lenient;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// Extractor that requires a signed-in admin.
///
/// Rejects with 401 when nobody is signed in (or the stored account no longer
/// deserializes) and 403 when the session holds a non-admin account. A
/// failing session store is a 500.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub User);

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let user = read_lenient::<User>(session, session_keys::CURRENT_ADMIN)
            .await?
            .ok_or_else(|| AppError::Unauthorized("admin login required".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("admin access required".to_string()));
        }

        Ok(Self(user))
    }
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &User,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(session_keys::CURRENT_ADMIN).await?;
    Ok(())
}
