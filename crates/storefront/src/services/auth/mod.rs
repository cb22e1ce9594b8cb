//! Authentication service.
//!
//! Checks logins against the fixed [`CredentialList`]. There is no account
//! backend; the configured delay stands in for its round-trip.

mod error;

pub use error::AuthError;

use std::time::Duration;

use bitewala_core::{CredentialList, User};

/// Mock authentication service.
pub struct AuthService<'a> {
    credentials: &'a CredentialList,
    delay: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(credentials: &'a CredentialList, delay: Duration) -> Self {
        Self { credentials, delay }
    }

    /// Log in with email and password.
    ///
    /// Blank fields are refused at once. Otherwise the simulated delay is
    /// waited out before answering, whether or not the account matches.
    /// Matching is exact; nothing is trimmed or case-folded.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        tokio::time::sleep(self.delay).await;

        self.credentials
            .verify(email, password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }
}
