//! Application state for admin.

use std::sync::Arc;

use bitewala_core::{Catalog, CredentialList};

use crate::config::AdminConfig;
use crate::services::OrderBook;

/// Application state shared across all admin handlers.
///
/// Cheap to clone; every field is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    orders: OrderBook,
    catalog: Catalog,
    credentials: CredentialList,
}

impl AppState {
    /// State backed by the demo orders, built-in catalog, and demo accounts.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_data(
            config,
            OrderBook::demo(),
            Catalog::builtin(),
            CredentialList::demo(),
        )
    }

    #[must_use]
    pub fn with_data(
        config: AdminConfig,
        orders: OrderBook,
        catalog: Catalog,
        credentials: CredentialList,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                catalog,
                credentials,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn orders(&self) -> &OrderBook {
        &self.inner.orders
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialList {
        &self.inner.credentials
    }
}
