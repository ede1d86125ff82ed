//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HOMECRAFT_GATEWAY_ENDPOINT` - URL of the external service backend
//!
//! ## Optional
//! - `HOMECRAFT_DATABASE_URL` - `SQLite` connection string
//!   (default: sqlite://homecraft.db)
//! - `HOMECRAFT_HOST` - Bind address (default: 127.0.0.1)
//! - `HOMECRAFT_PORT` - Listen port (default: 3000)
//! - `HOMECRAFT_GATEWAY_TIMEOUT_SECS` - Outbound request timeout (default: 10)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Default timeout for calls to the service gateway.
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Service gateway configuration
    pub gateway: GatewayConfig,
}

/// Service gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Endpoint that fulfills catalog lookups and order submission
    pub endpoint: String,
    /// Timeout applied to every outbound request
    pub timeout: Duration,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = SecretString::from(get_env_or_default(
            "HOMECRAFT_DATABASE_URL",
            "sqlite://homecraft.db",
        ));
        let host = get_env_or_default("HOMECRAFT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOMECRAFT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HOMECRAFT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOMECRAFT_PORT".to_string(), e.to_string()))?;

        let gateway = GatewayConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            gateway,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GatewayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let endpoint = get_required_env("HOMECRAFT_GATEWAY_ENDPOINT")?;
        let timeout_secs = get_env_or_default(
            "HOMECRAFT_GATEWAY_TIMEOUT_SECS",
            &DEFAULT_GATEWAY_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("HOMECRAFT_GATEWAY_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            gateway: GatewayConfig {
                endpoint: "http://127.0.0.1:9999".to_string(),
                timeout: Duration::from_secs(DEFAULT_GATEWAY_TIMEOUT_SECS),
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_gateway_timeout_default() {
        let config = test_config();
        assert_eq!(config.gateway.timeout, Duration::from_secs(10));
    }
}
