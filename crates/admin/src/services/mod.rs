//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Admin login (demo credentials, admin role only)
//! - `orders` - Read-only order book with search and status filtering
//! - `dashboard` - Metrics derived from the order book
//! - `products` - Product management listing

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;

pub use auth::{AdminAuthError, AdminAuthService};
pub use dashboard::DashboardMetrics;
pub use orders::{OrderBook, OrderQuery, OrderRow, StatusChangeAck, StatusFilter};
pub use products::{ProductRow, ProductStatus};
