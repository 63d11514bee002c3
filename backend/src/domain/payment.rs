//! Payment-initiation contract and gateway selection.
//!
//! Payments are a stub surface: the catalogue initiates a payment link with a
//! provider and hands the provider's response back verbatim. Which provider
//! handles a request is decided per call by a [`PaymentGatewaySelectionStrategy`];
//! the shipped strategy is a constant choice, kept behind the trait so a
//! rules-based one (amount bands, provider health) can replace it without
//! touching the HTTP adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported payment providers.
///
/// The discriminants are part of the selection contract: strategies return a
/// code, the adapter maps the code to a wired gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCode {
    Razorpay = 1,
    Stripe = 2,
}

/// Details needed to initiate a payment link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Customer email the provider notifies.
    pub email: String,
    /// Customer phone number the provider notifies.
    pub phone_number: String,
    /// Amount in the currency's minor unit.
    pub amount: i64,
    /// Order identifier used as the provider-side receipt.
    pub order_id: String,
}

/// Opaque provider response, relayed to the caller unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResponse {
    body: String,
}

impl PaymentResponse {
    /// Wrap a raw provider response body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Errors raised while talking to a payment provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// The provider rejected the request or could not be reached.
    #[error("payment provider call failed: {message}")]
    Provider { message: String },

    /// The provider is wired but intentionally unimplemented.
    #[error("payment provider {provider} is not implemented")]
    Unimplemented { provider: &'static str },
}

impl PaymentError {
    /// Create a provider error with the given message.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

/// Port for a payment provider integration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment link for the request and return the provider's
    /// response verbatim.
    async fn create_payment_link(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, PaymentError>;
}

/// Chooses which provider handles a payment.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentGatewaySelectionStrategy: Send + Sync {
    /// The provider for this request.
    fn select(&self) -> GatewayCode;
}

/// Fixed selection: every payment goes to one provider.
#[derive(Debug, Clone, Copy)]
pub struct StaticGatewaySelectionStrategy {
    gateway: GatewayCode,
}

impl StaticGatewaySelectionStrategy {
    /// Always select `gateway`.
    pub fn new(gateway: GatewayCode) -> Self {
        Self { gateway }
    }
}

impl Default for StaticGatewaySelectionStrategy {
    fn default() -> Self {
        Self::new(GatewayCode::Razorpay)
    }
}

impl PaymentGatewaySelectionStrategy for StaticGatewaySelectionStrategy {
    fn select(&self) -> GatewayCode {
        self.gateway
    }
}
