//! Application state shared across handlers.

use std::sync::Arc;

use bitewala_core::{Catalog, CredentialList};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is
/// read-only; per-visitor state lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    credentials: CredentialList,
}

impl AppState {
    /// Create application state with the built-in catalog and demo accounts.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_data(config, Catalog::builtin(), CredentialList::demo())
    }

    /// Create application state with explicit catalog and account data.
    #[must_use]
    pub fn with_data(
        config: StorefrontConfig,
        catalog: Catalog,
        credentials: CredentialList,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                credentials,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the mock credential list.
    #[must_use]
    pub fn credentials(&self) -> &CredentialList {
        &self.inner.credentials
    }
}
