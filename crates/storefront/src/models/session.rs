//! Session-related types.
//!
//! The storefront keeps all per-visitor state in the session: the cart
//! ledger and the signed-in user. Both are stored as JSON values under the
//! keys below. Stored values are read leniently; a value that no longer
//! deserializes is treated as absent.

pub use bitewala_core::sessions::read_lenient;

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for the shopper's cart (a list of product/quantity lines).
    pub const CART: &str = "cart";

    /// Key for the signed-in user.
    pub const CURRENT_USER: &str = "user";
}
