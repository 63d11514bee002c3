//! Domain ports for the hexagonal boundary.
//!
//! The persistence gateway and the cache live behind these traits so the
//! catalogue services never couple to Diesel, HTTP clients, or a particular
//! map implementation.

mod category_repository;
mod product_cache;
mod product_repository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use product_cache::MockProductCache;
pub use product_cache::{ProductCache, ProductCacheError};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    CategoryRef, NewProductRecord, ProductRepository, ProductRepositoryError,
    ProductUpdateRecord,
};
