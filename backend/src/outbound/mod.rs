//! Outbound adapters: persistence, cache, the remote catalogue, and payment
//! providers.

pub mod cache;
pub mod fakestore;
pub mod payment;
pub mod persistence;
