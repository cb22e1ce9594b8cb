//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added by the binary)
//! 2. Request ID (`tower-http` set/propagate `x-request-id`)
//! 3. `TraceLayer` (request span carrying the request ID)
//! 4. Session layer (tower-sessions, bounded in-memory store)
//! 5. Auth guard (`RequireAdminAuth` extractor on protected routes)

pub mod auth;
pub mod session;
pub mod trace;

pub use auth::{RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
pub use trace::{record_response, request_span};
