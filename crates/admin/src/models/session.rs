//! Session keys for admin authentication data.
//!
//! The signed-in admin is stored as a `bitewala_core::User` whose role is
//! always `admin`; non-admin accounts never reach the session.

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "user";
}
