//! Write- and read-side port for product rows.
//!
//! The port is a pure data-access facade: category resolution policy lives in
//! the service, which passes an explicit [`CategoryRef`] describing whether
//! to reuse a row or create one inside the same save (the cascade-on-create
//! semantics of the schema).

use async_trait::async_trait;

use crate::domain::product::{PageRequest, Product};

/// Errors raised by product persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductRepositoryError {
    /// A connection could not be established or checked out.
    #[error("product store connection failed: {message}")]
    Connection { message: String },

    /// A query failed during execution or row conversion.
    #[error("product store query failed: {message}")]
    Query { message: String },
}

impl ProductRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// How a product save resolves its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    /// Point at an existing category row.
    Existing(i64),
    /// Create (or reuse, if another writer got there first) a category with
    /// this title as part of the same save.
    Create(String),
}

/// Attributes persisted by a create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductRecord {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: CategoryRef,
}

/// Full post-merge row written by an update.
///
/// `category` is `None` when the update keeps the current category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdateRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<CategoryRef>,
}

/// Port for product persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Look up a product by id, joined with its category.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductRepositoryError>;

    /// All products, ascending by id.
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Products whose category title matches exactly; empty when none do.
    async fn list_by_category_title(
        &self,
        title: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Products whose title contains `fragment` (case as stored).
    async fn search_by_title(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// One page of products. An out-of-range page is an empty vector.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Persist a new product, resolving its category per [`CategoryRef`].
    async fn create(&self, record: NewProductRecord) -> Result<Product, ProductRepositoryError>;

    /// Persist a merged update and return the stored result.
    async fn update(&self, record: ProductUpdateRecord)
    -> Result<Product, ProductRepositoryError>;

    /// Delete a product row. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ProductRepositoryError>;
}
