//! Session-backed cart.
//!
//! The ledger itself lives in `bitewala_core::cart`; this wrapper loads it from
//! the visitor's session and writes it back after every mutation, so the
//! stored copy always matches what the last response reported.

use bitewala_core::Cart;
use tower_sessions::Session;

use crate::models::session::read_lenient;
use crate::models::session_keys;

/// The cart stored in one visitor's session.
pub struct CartSession<'a> {
    session: &'a Session,
}

impl<'a> CartSession<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the stored cart.
    ///
    /// A missing or malformed entry yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(&self) -> Result<Cart, tower_sessions::session::Error> {
        Ok(read_lenient::<Cart>(self.session, session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    /// Persist the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(&self, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(session_keys::CART, cart).await
    }

    /// Load, apply `mutate`, and write the result straight back.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn update(
        &self,
        mutate: impl FnOnce(&mut Cart),
    ) -> Result<Cart, tower_sessions::session::Error> {
        let mut cart = self.load().await?;
        mutate(&mut cart);
        self.save(&cart).await?;
        Ok(cart)
    }
}
