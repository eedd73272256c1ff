//! Application configuration loaded from the environment.
//!
//! The reference deployment hardcoded its connection string and bind
//! address; here every knob is an environment variable with a sensible
//! default, and the loaded values are injected rather than held in globals.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_AUTHENTICATOR_URL: &str = "https://web.socem.plymouth.ac.uk/COMP2001/auth/api/users";
const DEFAULT_AUTHENTICATOR_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is required and has no default.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// `BIND_ADDR` was present but not a `host:port` pair.
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),

    /// `AUTHENTICATOR_URL` was present but not an absolute URL.
    #[error("AUTHENTICATOR_URL is not a valid URL: {0}")]
    InvalidAuthenticatorUrl(String),

    /// `AUTHENTICATOR_TIMEOUT_SECS` was present but not a positive integer.
    #[error("AUTHENTICATOR_TIMEOUT_SECS is not a positive integer: {0}")]
    InvalidAuthenticatorTimeout(String),
}

/// Process-wide configuration, built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// External identity service endpoint for trail creation.
    pub authenticator_url: Url,
    /// Upper bound on one authentication round-trip.
    pub authenticator_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `DATABASE_URL` is absent or any
    /// present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Tests pass a
    /// closure over a map instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw))?;

        let auth_raw =
            lookup("AUTHENTICATOR_URL").unwrap_or_else(|| DEFAULT_AUTHENTICATOR_URL.to_owned());
        let authenticator_url = Url::parse(&auth_raw)
            .map_err(|_| ConfigError::InvalidAuthenticatorUrl(auth_raw))?;

        let timeout_secs = match lookup("AUTHENTICATOR_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidAuthenticatorTimeout(raw))?,
            None => DEFAULT_AUTHENTICATOR_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            authenticator_url,
            authenticator_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
