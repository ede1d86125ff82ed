//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::SiteConfig;
use crate::discount::{DiscountEngine, TieredDiscount};
use crate::gateway::GatewayClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool, the gateway client, and the
/// discount engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: SqlitePool,
    gateway: GatewayClient,
    discount: Arc<dyn DiscountEngine>,
}

impl AppState {
    /// Create a new application state with the default discount engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway HTTP client cannot be constructed.
    pub fn new(config: SiteConfig, pool: SqlitePool) -> Result<Self, reqwest::Error> {
        let gateway = GatewayClient::new(&config.gateway)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                gateway,
                discount: Arc::new(TieredDiscount),
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the service gateway client.
    #[must_use]
    pub fn gateway(&self) -> &GatewayClient {
        &self.inner.gateway
    }

    /// Get a reference to the discount engine.
    #[must_use]
    pub fn discount(&self) -> &dyn DiscountEngine {
        self.inner.discount.as_ref()
    }
}
