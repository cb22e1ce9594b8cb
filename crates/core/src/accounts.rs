//! Mock user accounts.
//!
//! The shop has no account backend: logins are checked against a fixed list
//! of demo credentials compiled into the binary. Passwords are held as
//! [`SecretString`] so they never show up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::types::{Email, Role, UserId};

/// A signed-in user as stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A user record plus the password that unlocks it.
#[derive(Debug)]
pub struct MockCredential {
    pub user: User,
    password: SecretString,
}

impl MockCredential {
    #[must_use]
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: SecretString::from(password.into()),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email.as_str() == email && self.password.expose_secret() == password
    }
}

/// The fixed credential list logins are checked against.
#[derive(Debug)]
pub struct CredentialList {
    credentials: Vec<MockCredential>,
}

impl CredentialList {
    #[must_use]
    pub const fn new(credentials: Vec<MockCredential>) -> Self {
        Self { credentials }
    }

    /// The two demo accounts: one admin, one shopper.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            MockCredential::new(
                User {
                    id: UserId::new("1"),
                    name: "Admin User".to_owned(),
                    email: Email::from_static("admin@bitewala.com"),
                    role: Role::Admin,
                },
                "admin123",
            ),
            MockCredential::new(
                User {
                    id: UserId::new("2"),
                    name: "Test User".to_owned(),
                    email: Email::from_static("user@example.com"),
                    role: Role::User,
                },
                "user123",
            ),
        ])
    }

    /// Find the user whose email and password both match exactly.
    #[must_use]
    pub fn verify(&self, email: &str, password: &str) -> Option<&User> {
        self.credentials
            .iter()
            .find(|credential| credential.matches(email, password))
            .map(|credential| &credential.user)
    }
}

impl Default for CredentialList {
    fn default() -> Self {
        Self::demo()
    }
}
