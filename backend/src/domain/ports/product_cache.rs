//! Port for the product-by-id cache.
//!
//! The cache is a derived, disposable view keyed by product id only. It is
//! never the system of record: callers treat every failure as a miss and
//! carry on. Category listings, searches, and pages are never cached —
//! cache-key design for open-ended filter/sort/page combinations is
//! unbounded.

use async_trait::async_trait;

use crate::domain::product::Product;

/// Errors raised by cache operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductCacheError {
    /// The cache backend failed.
    #[error("product cache failed: {message}")]
    Backend { message: String },
}

impl ProductCacheError {
    /// Create a backend error with the given message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Port for the product cache.
///
/// Implementations must give per-key atomic-replace semantics: a key's value
/// is always a fully formed [`Product`], never a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Fetch the cached product for `id`, if any.
    async fn get(&self, id: i64) -> Result<Option<Product>, ProductCacheError>;

    /// Store `product` under its id, replacing any previous entry.
    async fn put(&self, product: &Product) -> Result<(), ProductCacheError>;

    /// Drop the entry for `id`, if present.
    async fn evict(&self, id: i64) -> Result<(), ProductCacheError>;
}
