//! Domain model, service contracts, and ports.
//!
//! Everything in here is transport- and storage-agnostic: the HTTP adapter
//! lives under `inbound`, Diesel and the remote client under `outbound`.

pub mod catalogue;
pub mod cached;
pub mod error;
pub mod patch;
pub mod payment;
pub mod ports;
pub mod product;

#[cfg(test)]
pub use catalogue::MockCatalogueService;
pub use catalogue::{CatalogueService, LocalCatalogueService, StubCatalogueService};
pub use cached::CachingCatalogueService;
pub use error::{Error, ErrorCode};
pub use patch::ProductPatch;
pub use payment::{
    GatewayCode, PaymentError, PaymentGateway, PaymentGatewaySelectionStrategy, PaymentRequest,
    PaymentResponse, StaticGatewaySelectionStrategy,
};
pub use product::{
    Category, PageRequest, Product, ProductDraft, ProductValidationError, SortColumn,
    SortDirection, SortSpec, UnsupportedSortColumn,
};
