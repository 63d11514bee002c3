//! Inbound adapters (HTTP).

pub mod http;
