//! Bitewala Core - Shared types library.
//!
//! This crate provides common types used across all Bitewala components:
//! - `storefront` - Public-facing shop API
//! - `admin` - Staff dashboard and order console
//! - `cli` - Command-line catalog, quote, and order tools
//!
//! # Architecture
//!
//! The core crate contains only types, static data, and pure logic - no I/O
//! and no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Features
//!
//! - `sessions` - Bounded session store and lenient session reads used by
//!   both servers
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, and statuses
//! - [`catalog`] - The built-in product catalog
//! - [`cart`] - The cart/pricing ledger
//! - [`accounts`] - Mock user accounts for demo login
//! - [`order`] - Order snapshot types
//! - `sessions` - Session storage (requires the `sessions` feature)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod order;
#[cfg(feature = "sessions")]
pub mod sessions;
pub mod types;

pub use accounts::{CredentialList, MockCredential, User};
pub use cart::{Cart, CartSummary, CartTotals, LineItem, PriceLookup};
pub use catalog::{Catalog, Product, ProductFilter};
pub use order::{Customer, Order, OrderLine, Payment, ShippingAddress, demo_orders};
pub use types::*;
