//! Catalogue service contract and the local-store implementation.
//!
//! [`CatalogueService`] is the single capability set every backend offers.
//! Which implementation serves the HTTP adapter is a startup wiring decision
//! (see `server::config`), never per-request routing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::Error;
use crate::domain::patch::ProductPatch;
use crate::domain::ports::{
    CategoryRef, CategoryRepository, CategoryRepositoryError, NewProductRecord, ProductRepository,
    ProductRepositoryError, ProductUpdateRecord,
};
use crate::domain::product::{Category, PageRequest, Product, ProductDraft};

/// Capability contract shared by all catalogue backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueService: Send + Sync {
    /// All known categories.
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;

    /// One product by id; `NotFound` when absent.
    async fn get_product(&self, id: i64) -> Result<Product, Error>;

    /// All products.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;

    /// Products in the category with exactly this title; empty when none.
    async fn list_products_in_category(&self, title: &str) -> Result<Vec<Product>, Error>;

    /// Products whose title contains the fragment, case as stored.
    async fn search_products_by_title(&self, fragment: &str) -> Result<Vec<Product>, Error>;

    /// One page of products; out-of-range pages are empty, not errors.
    async fn list_products_paged(&self, page: PageRequest) -> Result<Vec<Product>, Error>;

    /// Persist a new product, creating its category on demand.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error>;

    /// Merge the patch into the stored product; `NotFound` before merging
    /// when the id is absent.
    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, Error>;

    /// Remove a product and return its id; `NotFound` when absent.
    async fn delete_product(&self, id: i64) -> Result<i64, Error>;
}

/// Catalogue service backed by the local relational store.
#[derive(Clone)]
pub struct LocalCatalogueService<P, C> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P, C> LocalCatalogueService<P, C> {
    /// Create a service over the given repositories.
    pub fn new(products: Arc<P>, categories: Arc<C>) -> Self {
        Self {
            products,
            categories,
        }
    }
}

impl<P, C> LocalCatalogueService<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    fn map_product_error(error: ProductRepositoryError) -> Error {
        match error {
            ProductRepositoryError::Connection { message } => {
                Error::internal(format!("product store unavailable: {message}"))
            }
            ProductRepositoryError::Query { message } => {
                Error::internal(format!("product store error: {message}"))
            }
        }
    }

    fn map_category_error(error: CategoryRepositoryError) -> Error {
        match error {
            CategoryRepositoryError::Connection { message } => {
                Error::internal(format!("category store unavailable: {message}"))
            }
            CategoryRepositoryError::Query { message } => {
                Error::internal(format!("category store error: {message}"))
            }
        }
    }

    /// Reuse the category row carrying `title` when one exists, otherwise
    /// have the save create it (cascade-on-create).
    async fn resolve_category(&self, title: &str) -> Result<CategoryRef, Error> {
        let existing = self
            .categories
            .find_by_title(title)
            .await
            .map_err(Self::map_category_error)?;
        match existing.and_then(|category| category.id) {
            Some(id) => Ok(CategoryRef::Existing(id)),
            None => Ok(CategoryRef::Create(title.to_owned())),
        }
    }
}

#[async_trait]
impl<P, C> CatalogueService for LocalCatalogueService<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .list_all()
            .await
            .map_err(Self::map_category_error)
    }

    async fn get_product(&self, id: i64) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .await
            .map_err(Self::map_product_error)?
            .ok_or_else(|| Error::product_not_found(id))
    }

    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.products
            .list_all()
            .await
            .map_err(Self::map_product_error)
    }

    async fn list_products_in_category(&self, title: &str) -> Result<Vec<Product>, Error> {
        self.products
            .list_by_category_title(title)
            .await
            .map_err(Self::map_product_error)
    }

    async fn search_products_by_title(&self, fragment: &str) -> Result<Vec<Product>, Error> {
        self.products
            .search_by_title(fragment)
            .await
            .map_err(Self::map_product_error)
    }

    async fn list_products_paged(&self, page: PageRequest) -> Result<Vec<Product>, Error> {
        self.products
            .list_page(page)
            .await
            .map_err(Self::map_product_error)
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        let category = self.resolve_category(&draft.category_title).await?;
        let record = NewProductRecord {
            title: draft.title,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
            category,
        };
        self.products
            .create(record)
            .await
            .map_err(|err| Error::creation_failed(format!("Failed to create product: {err}")))
    }

    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, Error> {
        let mut existing = self
            .products
            .find_by_id(id)
            .await
            .map_err(Self::map_product_error)?
            .ok_or_else(|| Error::product_not_found(id))?;

        patch.apply_to(&mut existing);

        // The category relation is excluded from the generic merge; a
        // non-null title means resolve-or-create and replace the reference.
        let category = match &patch.category_title {
            Some(title) => Some(self.resolve_category(title).await?),
            None => None,
        };

        let record = ProductUpdateRecord {
            id,
            title: existing.title,
            description: existing.description,
            price: existing.price,
            image_url: existing.image_url,
            category,
        };
        self.products
            .update(record)
            .await
            .map_err(Self::map_product_error)
    }

    async fn delete_product(&self, id: i64) -> Result<i64, Error> {
        let removed = self
            .products
            .delete(id)
            .await
            .map_err(Self::map_product_error)?;
        if removed {
            debug!(product_id = id, "product deleted");
            Ok(id)
        } else {
            Err(Error::product_not_found(id))
        }
    }
}

/// Placeholder backend for a second local store.
///
/// Every operation fails; it exists so the wiring for a future datasource has
/// a named slot, mirroring the service abstraction's third variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubCatalogueService;

impl StubCatalogueService {
    fn unimplemented(operation: &str) -> Error {
        Error::internal(format!(
            "operation {operation} is not implemented by this backend"
        ))
    }
}

#[async_trait]
impl CatalogueService for StubCatalogueService {
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Err(Self::unimplemented("list_categories"))
    }

    async fn get_product(&self, _id: i64) -> Result<Product, Error> {
        Err(Self::unimplemented("get_product"))
    }

    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        Err(Self::unimplemented("list_products"))
    }

    async fn list_products_in_category(&self, _title: &str) -> Result<Vec<Product>, Error> {
        Err(Self::unimplemented("list_products_in_category"))
    }

    async fn search_products_by_title(&self, _fragment: &str) -> Result<Vec<Product>, Error> {
        Err(Self::unimplemented("search_products_by_title"))
    }

    async fn list_products_paged(&self, _page: PageRequest) -> Result<Vec<Product>, Error> {
        Err(Self::unimplemented("list_products_paged"))
    }

    async fn create_product(&self, _draft: ProductDraft) -> Result<Product, Error> {
        Err(Self::unimplemented("create_product"))
    }

    async fn update_product(&self, _id: i64, _patch: ProductPatch) -> Result<Product, Error> {
        Err(Self::unimplemented("update_product"))
    }

    async fn delete_product(&self, _id: i64) -> Result<i64, Error> {
        Err(Self::unimplemented("delete_product"))
    }
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
