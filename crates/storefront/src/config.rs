//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_LOGIN_DELAY_MS` - Simulated login round-trip (default: 800)
//! - `STOREFRONT_CHECKOUT_DELAY_MS` - Simulated order processing (default: 2000)
//! - `STOREFRONT_CONTACT_DELAY_MS` - Simulated contact submission (default: 1500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Artificial latency for the mock backend
    pub delays: SimulatedDelays,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Latency the mock handlers wait before answering.
///
/// Stands in for the network round-trips a real backend would add. Tests
/// use [`SimulatedDelays::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub login: Duration,
    pub checkout: Duration,
    pub contact: Duration,
}

impl SimulatedDelays {
    /// No artificial latency.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            checkout: Duration::ZERO,
            contact: Duration::ZERO,
        }
    }
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(800),
            checkout: Duration::from_millis(2000),
            contact: Duration::from_millis(1500),
        }
    }
}

/// Sentry settings.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SimulatedDelays::default();

        Ok(Self {
            host: parse_or(&get, "STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?,
            port: parse_or(&get, "STOREFRONT_PORT", 3000)?,
            base_url: get("STOREFRONT_BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            delays: SimulatedDelays {
                login: millis_or(&get, "STOREFRONT_LOGIN_DELAY_MS", defaults.login)?,
                checkout: millis_or(&get, "STOREFRONT_CHECKOUT_DELAY_MS", defaults.checkout)?,
                contact: millis_or(&get, "STOREFRONT_CONTACT_DELAY_MS", defaults.contact)?,
            },
            sentry: SentryConfig {
                dsn: get("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
                environment: get("SENTRY_ENVIRONMENT"),
                sample_rate: parse_or(&get, "SENTRY_SAMPLE_RATE", 1.0)?,
                traces_sample_rate: parse_or(&get, "SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
            },
        })
    }

    /// Local development configuration with no artificial latency.
    #[must_use]
    pub fn local() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            delays: SimulatedDelays::none(),
            sentry: SentryConfig::default(),
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should be marked `Secure`.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when it is unset.
fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a millisecond count into a `Duration`.
fn millis_or(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let fallback = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_or(get, key, fallback).map(Duration::from_millis)
}
