//! Payment HTTP handlers.
//!
//! ```text
//! POST /payment/
//! POST /razorpayWebHook/
//! ```

use actix_web::{HttpResponse, post, web};
use tracing::info;

use crate::domain::payment::{GatewayCode, PaymentRequest};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Initiate a payment link with the selected provider.
///
/// The provider's response is relayed verbatim; callers parse the link out of
/// the provider payload themselves.
#[utoipa::path(
    post,
    path = "/payment/",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Raw provider response"),
        (status = 500, description = "Provider call failed", body = Error)
    ),
    tags = ["payments"],
    operation_id = "initiatePayment"
)]
#[post("/payment/")]
pub async fn initiate_payment(
    state: web::Data<HttpState>,
    payload: web::Json<PaymentRequest>,
) -> ApiResult<HttpResponse> {
    let gateway = match state.gateway_selection.select() {
        GatewayCode::Razorpay => &state.razorpay,
        GatewayCode::Stripe => &state.stripe,
    };
    let response = gateway
        .create_payment_link(&payload)
        .await
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(response.body().to_owned()))
}

/// Acknowledge provider callbacks.
///
/// The payload is logged and dropped; payment state reconciliation is out of
/// scope for the catalogue.
#[utoipa::path(
    post,
    path = "/razorpayWebHook/",
    responses((status = 200, description = "Acknowledged")),
    tags = ["payments"],
    operation_id = "razorpayWebhook"
)]
#[post("/razorpayWebHook/")]
pub async fn razorpay_webhook(payload: web::Json<serde_json::Value>) -> HttpResponse {
    let event = payload
        .get("event")
        .and_then(|value| value.as_str())
        .unwrap_or("unknown");
    info!(event, "razorpay webhook received");
    HttpResponse::Ok().finish()
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
