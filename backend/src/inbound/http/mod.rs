//! HTTP adapter: handlers, shared state, routing, and error mapping.

pub mod error;
pub mod payments;
pub mod products;
pub mod routes;
pub mod state;

pub use error::ApiResult;
pub use routes::configure;
pub use state::HttpState;
