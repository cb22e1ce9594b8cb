//! Contact form route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::services::{ContactForm, ContactReceipt, ContactService};
use crate::state::AppState;

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactReceipt>> {
    let receipt = ContactService::new(state.config().delays.contact)
        .submit(&form)
        .await?;
    Ok(Json(receipt))
}
