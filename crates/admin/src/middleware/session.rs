//! Session middleware configuration for admin.
//!
//! In-memory sessions with stricter cookie settings than the storefront
//! (SameSite=Strict, 24hr expiry).

use bitewala_core::sessions::SessionCache;
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::AdminConfig;

/// Session cookie name for admin.
pub const SESSION_COOKIE_NAME: &str = "bw_admin_session";

/// Session expiry time in seconds (24 hours - stricter than storefront).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Staff sessions are few.
const MAX_SESSIONS: u64 = 1_000;

#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<SessionCache> {
    SessionManagerLayer::new(SessionCache::new(MAX_SESSIONS))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
