//! In-process implementation of the `ProductCache` port.
//!
//! A `RwLock<HashMap>` keyed by product id. Entries are replaced atomically
//! and never expire; the catalogue's write paths keep them fresh and the
//! delete path evicts. A distributed cache would slot in behind the same
//! port.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{ProductCache, ProductCacheError};
use crate::domain::product::Product;

/// Process-local product cache.
#[derive(Debug, Default)]
pub struct InMemoryProductCache {
    entries: RwLock<HashMap<i64, Product>>,
}

impl InMemoryProductCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductCache for InMemoryProductCache {
    async fn get(&self, id: i64) -> Result<Option<Product>, ProductCacheError> {
        let entries = self
            .entries
            .read()
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        Ok(entries.get(&id).cloned())
    }

    async fn put(&self, product: &Product) -> Result<(), ProductCacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        entries.insert(product.id, product.clone());
        Ok(())
    }

    async fn evict(&self, id: i64) -> Result<(), ProductCacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        entries.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Category;
    use rstest::rstest;

    fn sample_product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_owned(),
            description: None,
            price: Some(9.0),
            image_url: None,
            is_deleted: false,
            created_on: None,
            last_updated_on: None,
            category: Category::from_title("electronics"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn get_misses_until_put() {
        let cache = InMemoryProductCache::new();
        assert!(cache.get(1).await.expect("get").is_none());

        cache.put(&sample_product(1, "Phone")).await.expect("put");

        let hit = cache.get(1).await.expect("get").expect("hit");
        assert_eq!(hit.title, "Phone");
    }

    #[rstest]
    #[tokio::test]
    async fn put_replaces_the_previous_entry() {
        let cache = InMemoryProductCache::new();
        cache.put(&sample_product(1, "Phone")).await.expect("put");
        cache
            .put(&sample_product(1, "Phone XL"))
            .await
            .expect("put");

        let hit = cache.get(1).await.expect("get").expect("hit");
        assert_eq!(hit.title, "Phone XL");
    }

    #[rstest]
    #[tokio::test]
    async fn evict_drops_only_the_named_entry() {
        let cache = InMemoryProductCache::new();
        cache.put(&sample_product(1, "Phone")).await.expect("put");
        cache.put(&sample_product(2, "Chair")).await.expect("put");

        cache.evict(1).await.expect("evict");
        cache.evict(404).await.expect("evicting a miss is fine");

        assert!(cache.get(1).await.expect("get").is_none());
        assert!(cache.get(2).await.expect("get").is_some());
    }
}
