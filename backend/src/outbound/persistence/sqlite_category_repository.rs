//! SQLite-backed `CategoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::product::Category;

use super::models::{CategoryRow, row_to_category};
use super::pool::{DbPool, PoolError};
use super::schema::categories;
use super::{RunError, run_blocking};

/// Diesel-backed implementation of the `CategoryRepository` port.
#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_run_error(error: RunError) -> CategoryRepositoryError {
    match error {
        RunError::Pool(
            PoolError::Checkout { message }
            | PoolError::Build { message }
            | PoolError::Migration { message },
        ) => CategoryRepositoryError::connection(message),
        RunError::Diesel(err) => CategoryRepositoryError::query(err.to_string()),
        RunError::Join(message) => CategoryRepositoryError::query(message),
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let rows = run_blocking(&self.pool, |conn| {
            categories::table
                .order(categories::id.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(rows.into_iter().map(row_to_category).collect())
    }

    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let title = title.to_owned();
        let row = run_blocking(&self.pool, move |conn| {
            categories::table
                .filter(categories::title.eq(title))
                .select(CategoryRow::as_select())
                .first(conn)
                .optional()
        })
        .await
        .map_err(map_run_error)?;
        Ok(row.map(row_to_category))
    }
}
