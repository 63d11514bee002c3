//! Handler tests for the payment routes over mocked gateways.

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::json;

use super::*;
use crate::domain::payment::{
    MockPaymentGateway, PaymentError, PaymentResponse, StaticGatewaySelectionStrategy,
};
use crate::domain::MockCatalogueService;
use crate::inbound::http::configure;
use crate::outbound::payment::StripeGateway;

fn state_with(
    razorpay: MockPaymentGateway,
    gateway: GatewayCode,
) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        catalogue: Arc::new(MockCatalogueService::new()),
        razorpay: Arc::new(razorpay),
        stripe: Arc::new(StripeGateway),
        gateway_selection: Arc::new(StaticGatewaySelectionStrategy::new(gateway)),
    })
}

fn payment_body() -> serde_json::Value {
    json!({
        "email": "buyer@example.com",
        "phoneNumber": "9999999999",
        "amount": 50000,
        "orderId": "order-42",
    })
}

#[actix_web::test]
async fn payment_relays_the_selected_providers_response() {
    let mut razorpay = MockPaymentGateway::new();
    razorpay
        .expect_create_payment_link()
        .withf(|request| request.order_id == "order-42" && request.amount == 50_000)
        .times(1)
        .return_once(|_| Ok(PaymentResponse::new(r#"{"short_url":"https://rzp.io/i/x"}"#)));

    let app = test::init_service(
        App::new()
            .app_data(state_with(razorpay, GatewayCode::Razorpay))
            .configure(configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/payment/")
        .set_json(payment_body())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["short_url"], "https://rzp.io/i/x");
}

#[actix_web::test]
async fn provider_failures_surface_as_redacted_internal_errors() {
    let mut razorpay = MockPaymentGateway::new();
    razorpay
        .expect_create_payment_link()
        .return_once(|_| Err(PaymentError::provider("BAD_REQUEST_ERROR")));

    let app = test::init_service(
        App::new()
            .app_data(state_with(razorpay, GatewayCode::Razorpay))
            .configure(configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/payment/")
        .set_json(payment_body())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn stripe_selection_routes_to_the_stripe_slot() {
    // The razorpay mock has no expectations, so reaching it would panic.
    let app = test::init_service(
        App::new()
            .app_data(state_with(MockPaymentGateway::new(), GatewayCode::Stripe))
            .configure(configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/payment/")
        .set_json(payment_body())
        .to_request();
    let response = test::call_service(&app, request).await;

    // Stripe is wired but unimplemented.
    assert_eq!(response.status().as_u16(), 500);
}

#[actix_web::test]
async fn the_webhook_acknowledges_provider_callbacks() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(MockPaymentGateway::new(), GatewayCode::Razorpay))
            .configure(configure),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/razorpayWebHook/")
        .set_json(json!({ "event": "payment_link.paid" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
}
