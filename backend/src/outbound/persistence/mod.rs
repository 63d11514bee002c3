//! Diesel/SQLite adapters for the repository ports.

mod models;
pub mod pool;
pub mod schema;
mod sqlite_category_repository;
mod sqlite_product_repository;

pub use pool::{DbPool, PoolConfig, PoolError};
pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_product_repository::SqliteProductRepository;

use diesel::sqlite::SqliteConnection;

/// Failure modes of a pooled blocking query.
#[derive(Debug)]
pub(crate) enum RunError {
    Pool(PoolError),
    Diesel(diesel::result::Error),
    Join(String),
}

/// Run a synchronous Diesel operation on the blocking thread pool.
///
/// Checkout happens inside the blocking task so the async runtime never
/// waits on the pool.
pub(crate) async fn run_blocking<T, F>(pool: &DbPool, operation: F) -> Result<T, RunError>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> Result<T, diesel::result::Error> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(RunError::Pool)?;
        operation(&mut conn).map_err(RunError::Diesel)
    })
    .await
    .map_err(|err| RunError::Join(err.to_string()))?
}
