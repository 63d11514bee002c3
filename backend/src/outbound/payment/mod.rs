//! Payment provider adapters.
//!
//! Razorpay is the live integration: it creates a payment link and relays
//! the provider response verbatim. Stripe is wired but intentionally
//! unimplemented, so selecting it fails loudly instead of silently dropping
//! payments.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::domain::payment::{PaymentError, PaymentGateway, PaymentRequest, PaymentResponse};

/// Payment-link gateway backed by Razorpay's REST API.
pub struct RazorpayGateway {
    client: Client,
    base_url: String,
    key_id: String,
    key_secret: String,
    callback_url: String,
}

impl RazorpayGateway {
    /// Create a gateway authenticating with the given API key pair.
    pub fn new(
        client: Client,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: "https://api.razorpay.com".to_owned(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Point the gateway at a different API host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}

/// Shape the payment-link creation payload.
///
/// Amounts are already in the minor unit; the provider is told to notify the
/// customer over both SMS and email and to redirect through `callback_url`
/// when payment completes.
fn payment_link_payload(request: &PaymentRequest, callback_url: &str) -> Value {
    json!({
        "amount": request.amount,
        "currency": "INR",
        "accept_partial": false,
        "reference_id": request.order_id,
        "customer": {
            "email": request.email,
            "contact": request.phone_number,
        },
        "notify": {
            "sms": true,
            "email": true,
        },
        "callback_url": callback_url,
        "callback_method": "get",
    })
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_payment_link(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, PaymentError> {
        let payload = payment_link_payload(request, &self.callback_url);
        let response = self
            .client
            .post(format!("{}/v1/payment_links", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&payload)
            .send()
            .await
            .map_err(|err| PaymentError::provider(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| PaymentError::provider(err.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::provider(format!(
                "payment link creation returned {status}: {body}"
            )));
        }
        Ok(PaymentResponse::new(body))
    }
}

/// Placeholder Stripe integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripeGateway;

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_link(
        &self,
        _request: &PaymentRequest,
    ) -> Result<PaymentResponse, PaymentError> {
        Err(PaymentError::Unimplemented { provider: "stripe" })
    }
}
