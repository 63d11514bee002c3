//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O. Which catalogue
//! backend sits behind `catalogue` is decided once at startup.

use std::sync::Arc;

use crate::domain::{CatalogueService, PaymentGateway, PaymentGatewaySelectionStrategy};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The catalogue backend chosen at startup, behind the caching decorator.
    pub catalogue: Arc<dyn CatalogueService>,
    /// Razorpay payment-link integration.
    pub razorpay: Arc<dyn PaymentGateway>,
    /// Stripe integration (wired, intentionally unimplemented).
    pub stripe: Arc<dyn PaymentGateway>,
    /// Strategy deciding which provider handles a payment.
    pub gateway_selection: Arc<dyn PaymentGatewaySelectionStrategy>,
}
