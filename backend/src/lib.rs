//! Product catalogue backend library.
//!
//! Hexagonal layout: `domain` holds the model, service contracts, and ports;
//! `inbound` the HTTP adapter; `outbound` the SQLite, remote-catalogue,
//! cache, and payment adapters; `server` the startup wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
