//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP path and the schemas they reference. The
//! generated document is exposed for external tooling; no UI is bundled.

use utoipa::OpenApi;

use crate::domain::payment::PaymentRequest;
use crate::domain::product::{Category, Product};
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::products::ProductRequest;

/// OpenAPI document for the catalogue API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalogue API",
        description = "Product and category catalogue with payment initiation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::search_products,
        crate::inbound::http::products::list_products_paged,
        crate::inbound::http::products::list_products_in_category,
        crate::inbound::http::products::list_categories,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::payments::initiate_payment,
        crate::inbound::http::payments::razorpay_webhook,
    ),
    components(schemas(Product, Category, ProductRequest, PaymentRequest, Error, ErrorCode)),
    tags(
        (name = "products", description = "Product and category catalogue"),
        (name = "payments", description = "Payment initiation and callbacks")
    )
)]
pub struct ApiDoc;
