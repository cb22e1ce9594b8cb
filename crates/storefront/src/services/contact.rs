//! Contact form submission.
//!
//! Messages are not delivered anywhere; submission logs the sender and
//! answers with a fixed acknowledgment after the simulated delay.

use std::time::Duration;

use bitewala_core::{Email, EmailError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acknowledgment shown after a successful submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Errors that reject a contact submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Contact form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: &'static str,
}

impl ContactForm {
    fn validate(&self) -> Result<Email, ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(Email::parse(&self.email)?)
    }
}

pub struct ContactService {
    delay: Duration,
}

impl ContactService {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate and "send" a contact message.
    ///
    /// # Errors
    ///
    /// Returns `ContactError` if a field is blank or the email is invalid.
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, ContactError> {
        let email = form.validate()?;

        tokio::time::sleep(self.delay).await;

        tracing::info!(
            sender_domain = email.domain(),
            message_len = form.message.len(),
            "Contact message received"
        );

        Ok(ContactReceipt {
            success: true,
            message: THANK_YOU_MESSAGE,
        })
    }
}
