//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Mock login against the demo credential list
//! - `cart` - Session-backed cart ledger with write-through persistence
//! - `checkout` - Checkout form validation and order placement
//! - `contact` - Contact form submission

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod contact;

pub use auth::{AuthError, AuthService};
pub use cart::CartSession;
pub use checkout::{
    CheckoutError, CheckoutForm, CheckoutService, OrderConfirmation, settle_cart,
};
pub use contact::{ContactError, ContactForm, ContactReceipt, ContactService};
