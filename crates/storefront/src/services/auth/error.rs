//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during login.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was left blank.
    #[error("email and password are required")]
    MissingCredentials,

    /// Wrong password or unknown email.
    #[error("invalid credentials")]
    InvalidCredentials,
}
