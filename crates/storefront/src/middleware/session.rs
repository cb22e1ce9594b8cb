//! Session middleware configuration.
//!
//! Sessions live in process memory. A restart forgets every cart and login,
//! which matches the throwaway nature of the mock backend. Idle sessions are
//! evicted once their cookie expiry passes.

use bitewala_core::sessions::SessionCache;
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bw_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Most visitor sessions held at once; the least valuable are evicted beyond this.
const MAX_SESSIONS: u64 = 100_000;

/// Create the session layer backed by a fresh bounded store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<SessionCache> {
    SessionManagerLayer::new(SessionCache::new(MAX_SESSIONS))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
