//! Route registration.
//!
//! Literal segments under `/products` (`categories`, `p`, `category`) are
//! registered ahead of the `/products/{id}` matcher so they never parse as an
//! id.

use actix_web::web;

use super::{payments, products};

/// Register every HTTP route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(products::list_categories)
        .service(products::list_products_paged)
        .service(products::list_products_in_category)
        .service(products::search_products)
        .service(products::create_product)
        .service(products::list_products)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(payments::initiate_payment)
        .service(payments::razorpay_webhook);
}
