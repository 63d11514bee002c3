//! SQLite-backed `ProductRepository` implementation using Diesel ORM.
//!
//! Saves run inside a transaction so cascade-on-create category resolution
//! and the product write commit or roll back together.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::domain::ports::{
    CategoryRef, NewProductRecord, ProductRepository, ProductRepositoryError, ProductUpdateRecord,
};
use crate::domain::product::{PageRequest, Product, SortColumn, SortDirection, SortSpec};

use super::models::{
    CategoryRow, NewCategoryRow, NewProductRow, ProductChangeset, ProductRow, rows_to_product,
};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, products};
use super::{RunError, run_blocking};

/// Diesel-backed implementation of the `ProductRepository` port.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: DbPool,
}

impl SqliteProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map blocking-query failures to domain product repository errors.
fn map_run_error(error: RunError) -> ProductRepositoryError {
    match error {
        RunError::Pool(PoolError::Checkout { message } | PoolError::Build { message }) => {
            ProductRepositoryError::connection(message)
        }
        RunError::Pool(PoolError::Migration { message }) => {
            ProductRepositoryError::connection(message)
        }
        RunError::Diesel(err) => map_diesel_error(err),
        RunError::Join(message) => ProductRepositoryError::query(message),
    }
}

/// Map Diesel errors to domain product repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProductRepositoryError::connection(error.to_string())
        }
        other => ProductRepositoryError::query(other.to_string()),
    }
}

/// Resolve a [`CategoryRef`] to a category row id, inserting the row when the
/// title is not stored yet. Must run inside the caller's transaction.
fn resolve_category_id(
    conn: &mut SqliteConnection,
    category: &CategoryRef,
    now: NaiveDateTime,
) -> QueryResult<i64> {
    match category {
        CategoryRef::Existing(id) => Ok(*id),
        CategoryRef::Create(title) => {
            let existing = categories::table
                .filter(categories::title.eq(title))
                .select(categories::id)
                .first::<i64>(conn)
                .optional()?;
            if let Some(id) = existing {
                return Ok(id);
            }
            diesel::insert_into(categories::table)
                .values(&NewCategoryRow {
                    title,
                    created_on: now,
                    last_updated_on: now,
                })
                .returning(categories::id)
                .get_result(conn)
        }
    }
}

/// Load a product row joined with its category.
fn load_product(
    conn: &mut SqliteConnection,
    id: i64,
) -> QueryResult<Option<(ProductRow, CategoryRow)>> {
    products::table
        .inner_join(categories::table)
        .filter(products::id.eq(id))
        .select((ProductRow::as_select(), CategoryRow::as_select()))
        .first(conn)
        .optional()
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductRepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| load_product(conn, id))
            .await
            .map_err(map_run_error)?;
        Ok(rows.map(|(product, category)| rows_to_product(product, category)))
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let rows = run_blocking(&self.pool, |conn| {
            products::table
                .inner_join(categories::table)
                .order(products::id.asc())
                .select((ProductRow::as_select(), CategoryRow::as_select()))
                .load::<(ProductRow, CategoryRow)>(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(rows
            .into_iter()
            .map(|(product, category)| rows_to_product(product, category))
            .collect())
    }

    async fn list_by_category_title(
        &self,
        title: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let title = title.to_owned();
        let rows = run_blocking(&self.pool, move |conn| {
            products::table
                .inner_join(categories::table)
                .filter(categories::title.eq(title))
                .order(products::id.asc())
                .select((ProductRow::as_select(), CategoryRow::as_select()))
                .load::<(ProductRow, CategoryRow)>(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(rows
            .into_iter()
            .map(|(product, category)| rows_to_product(product, category))
            .collect())
    }

    async fn search_by_title(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let pattern = format!("%{fragment}%");
        let rows = run_blocking(&self.pool, move |conn| {
            products::table
                .inner_join(categories::table)
                .filter(products::title.like(pattern))
                .order(products::id.asc())
                .select((ProductRow::as_select(), CategoryRow::as_select()))
                .load::<(ProductRow, CategoryRow)>(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(rows
            .into_iter()
            .map(|(product, category)| rows_to_product(product, category))
            .collect())
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Product>, ProductRepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            let mut query = products::table
                .inner_join(categories::table)
                .select((ProductRow::as_select(), CategoryRow::as_select()))
                .into_boxed();

            query = match page.sort {
                None
                | Some(SortSpec {
                    column: SortColumn::Id,
                    direction: SortDirection::Ascending,
                }) => query.order(products::id.asc()),
                Some(SortSpec {
                    column: SortColumn::Id,
                    direction: SortDirection::Descending,
                }) => query.order(products::id.desc()),
                Some(SortSpec {
                    column: SortColumn::Title,
                    direction: SortDirection::Ascending,
                }) => query.order(products::title.asc()),
                Some(SortSpec {
                    column: SortColumn::Title,
                    direction: SortDirection::Descending,
                }) => query.order(products::title.desc()),
                Some(SortSpec {
                    column: SortColumn::Price,
                    direction: SortDirection::Ascending,
                }) => query.order(products::price.asc()),
                Some(SortSpec {
                    column: SortColumn::Price,
                    direction: SortDirection::Descending,
                }) => query.order(products::price.desc()),
                Some(SortSpec {
                    column: SortColumn::CreatedOn,
                    direction: SortDirection::Ascending,
                }) => query.order(products::created_on.asc()),
                Some(SortSpec {
                    column: SortColumn::CreatedOn,
                    direction: SortDirection::Descending,
                }) => query.order(products::created_on.desc()),
            };

            query
                .limit(i64::from(page.page_size))
                .offset(page.offset())
                .load::<(ProductRow, CategoryRow)>(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(rows
            .into_iter()
            .map(|(product, category)| rows_to_product(product, category))
            .collect())
    }

    async fn create(&self, record: NewProductRecord) -> Result<Product, ProductRepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            conn.transaction(|conn| {
                let now = Utc::now().naive_utc();
                let category_id = resolve_category_id(conn, &record.category, now)?;
                let id: i64 = diesel::insert_into(products::table)
                    .values(&NewProductRow {
                        title: &record.title,
                        description: record.description.as_deref(),
                        price: record.price,
                        image_url: record.image_url.as_deref(),
                        created_on: now,
                        last_updated_on: now,
                        category_id,
                    })
                    .returning(products::id)
                    .get_result(conn)?;
                load_product(conn, id)?.ok_or(diesel::result::Error::NotFound)
            })
        })
        .await
        .map_err(map_run_error)?;
        let (product, category) = rows;
        Ok(rows_to_product(product, category))
    }

    async fn update(
        &self,
        record: ProductUpdateRecord,
    ) -> Result<Product, ProductRepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            conn.transaction(|conn| {
                let now = Utc::now().naive_utc();
                let category_id = match &record.category {
                    Some(category) => Some(resolve_category_id(conn, category, now)?),
                    None => None,
                };
                let changed = diesel::update(products::table.filter(products::id.eq(record.id)))
                    .set(&ProductChangeset {
                        title: &record.title,
                        description: record.description.as_deref(),
                        price: record.price,
                        image_url: record.image_url.as_deref(),
                        category_id,
                        last_updated_on: now,
                    })
                    .execute(conn)?;
                if changed == 0 {
                    return Err(diesel::result::Error::NotFound);
                }
                load_product(conn, record.id)?.ok_or(diesel::result::Error::NotFound)
            })
        })
        .await
        .map_err(map_run_error)?;
        let (product, category) = rows;
        Ok(rows_to_product(product, category))
    }

    async fn delete(&self, id: i64) -> Result<bool, ProductRepositoryError> {
        let removed = run_blocking(&self.pool, move |conn| {
            diesel::delete(products::table.filter(products::id.eq(id))).execute(conn)
        })
        .await
        .map_err(map_run_error)?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
#[path = "sqlite_repository_tests.rs"]
mod tests;
