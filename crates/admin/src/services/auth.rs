//! Admin login.
//!
//! Uses the same demo credential list as the storefront, but only accounts
//! with the admin role may sign in.

use std::time::Duration;

use bitewala_core::{CredentialList, User};
use thiserror::Error;

/// Reasons an admin login is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminAuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account exists but is not staff.
    #[error("account does not have admin access")]
    NotAdmin,
}

pub struct AdminAuthService<'a> {
    credentials: &'a CredentialList,
    delay: Duration,
}

impl<'a> AdminAuthService<'a> {
    #[must_use]
    pub const fn new(credentials: &'a CredentialList, delay: Duration) -> Self {
        Self { credentials, delay }
    }

    /// Check credentials after the simulated delay.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidCredentials` if nothing matches and
    /// `AdminAuthError::NotAdmin` for a valid non-admin account.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AdminAuthError> {
        tokio::time::sleep(self.delay).await;

        let user = self
            .credentials
            .verify(email, password)
            .ok_or(AdminAuthError::InvalidCredentials)?;

        if user.is_admin() {
            Ok(user.clone())
        } else {
            Err(AdminAuthError::NotAdmin)
        }
    }
}
