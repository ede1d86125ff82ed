//! Service gateway client.
//!
//! A single external POST endpoint fulfills both catalog lookups and
//! order submission. All calls are synchronous from the request's point
//! of view and carry a configured timeout.
//!
//! Transport faults and non-success statuses always surface as a
//! [`GatewayError`] so callers fail closed instead of proceeding with a
//! partially-initialized result.

mod types;

pub use types::{GatewayEnvelope, GatewayRequest, ServiceDetails};

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use homecraft_core::UserId;

use crate::cart::CartLine;
use crate::config::GatewayConfig;

/// Errors that can occur when calling the service gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not be completed (connect failure, timeout, ...).
    #[error("gateway unreachable: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned status {status}")]
    Unavailable { status: u16 },

    /// The response envelope had no body to decode.
    #[error("gateway response is missing a body")]
    MissingBody,

    /// The response could not be decoded.
    #[error("gateway response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the external service backend.
///
/// Cheaply cloneable; the underlying HTTP client and endpoint are shared.
#[derive(Clone)]
pub struct GatewayClient {
    inner: Arc<GatewayClientInner>,
}

struct GatewayClientInner {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Create a new gateway client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(GatewayClientInner {
                http,
                endpoint: config.endpoint.clone(),
            }),
        })
    }

    /// Send one request and decode the response envelope.
    async fn execute(&self, request: &GatewayRequest<'_>) -> Result<GatewayEnvelope, GatewayError> {
        let response = self
            .inner
            .http
            .post(&self.inner.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %text.chars().take(200).collect::<String>(),
                "gateway returned non-success status"
            );
            return Err(GatewayError::Unavailable {
                status: status.as_u16(),
            });
        }

        let envelope: GatewayEnvelope = serde_json::from_str(&text)?;

        if !envelope.is_success() {
            return Err(GatewayError::Unavailable {
                status: envelope.status_code.unwrap_or(0),
            });
        }

        Ok(envelope)
    }

    /// Fetch the details for one catalog service.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway is unreachable, answers with a
    /// non-success status, or returns an undecodable body.
    #[instrument(skip(self))]
    pub async fn get_service_details(
        &self,
        service_name: &str,
    ) -> Result<ServiceDetails, GatewayError> {
        let envelope = self
            .execute(&GatewayRequest::GetServiceDetails { service_name })
            .await?;

        let body = envelope.body.ok_or(GatewayError::MissingBody)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Submit the cart as an order for the given user.
    ///
    /// The line items are forwarded exactly as stored in the session;
    /// success is purely the gateway's status, with no confirmation
    /// read-back.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway is unreachable or answers with a
    /// non-success status.
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub async fn add_order(&self, user_id: UserId, cart: &[CartLine]) -> Result<(), GatewayError> {
        self.execute(&GatewayRequest::AddOrder {
            user_id: user_id.as_i64(),
            cart,
        })
        .await?;

        Ok(())
    }
}
