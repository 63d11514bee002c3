//! Read-through/write-through caching decorator for catalogue backends.
//!
//! Every cache touch point is an explicit call here rather than an
//! annotation on a handler: create and update write through, get reads
//! through, delete evicts unconditionally. Listings, searches, and pages are
//! never cached. Cache failures are logged and treated as misses — the cache
//! is a derived view, never the system of record.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::catalogue::CatalogueService;
use crate::domain::error::Error;
use crate::domain::patch::ProductPatch;
use crate::domain::ports::ProductCache;
use crate::domain::product::{Category, PageRequest, Product, ProductDraft};

/// Decorator adding product-by-id caching to any [`CatalogueService`].
pub struct CachingCatalogueService {
    inner: Arc<dyn CatalogueService>,
    cache: Arc<dyn ProductCache>,
}

impl CachingCatalogueService {
    /// Wrap `inner` with the given cache.
    pub fn new(inner: Arc<dyn CatalogueService>, cache: Arc<dyn ProductCache>) -> Self {
        Self { inner, cache }
    }

    async fn try_put(&self, product: &Product) {
        if let Err(err) = self.cache.put(product).await {
            warn!(product_id = product.id, error = %err, "cache put failed");
        }
    }

    async fn try_evict(&self, id: i64) {
        if let Err(err) = self.cache.evict(id).await {
            warn!(product_id = id, error = %err, "cache evict failed");
        }
    }
}

#[async_trait]
impl CatalogueService for CachingCatalogueService {
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.inner.list_categories().await
    }

    async fn get_product(&self, id: i64) -> Result<Product, Error> {
        match self.cache.get(id).await {
            Ok(Some(product)) => return Ok(product),
            Ok(None) => {}
            Err(err) => warn!(product_id = id, error = %err, "cache read failed"),
        }
        let product = self.inner.get_product(id).await?;
        self.try_put(&product).await;
        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.inner.list_products().await
    }

    async fn list_products_in_category(&self, title: &str) -> Result<Vec<Product>, Error> {
        self.inner.list_products_in_category(title).await
    }

    async fn search_products_by_title(&self, fragment: &str) -> Result<Vec<Product>, Error> {
        self.inner.search_products_by_title(fragment).await
    }

    async fn list_products_paged(&self, page: PageRequest) -> Result<Vec<Product>, Error> {
        self.inner.list_products_paged(page).await
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        let created = self.inner.create_product(draft).await?;
        // An incomplete echo (no title) is not worth caching; remote
        // backends can hand those back.
        if created.title.trim().is_empty() {
            return Ok(created);
        }
        self.try_put(&created).await;
        Ok(created)
    }

    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, Error> {
        let updated = self.inner.update_product(id, patch).await?;
        self.try_put(&updated).await;
        Ok(updated)
    }

    async fn delete_product(&self, id: i64) -> Result<i64, Error> {
        let deleted = self.inner.delete_product(id).await?;
        self.try_evict(deleted).await;
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "cached_tests.rs"]
mod tests;
