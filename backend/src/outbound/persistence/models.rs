//! Row types bridging the Diesel schema and the domain aggregates.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{Category, Product};

use super::schema::{categories, products};

/// A `categories` row as read from the store.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    pub id: i64,
    pub title: String,
    pub is_deleted: bool,
    pub created_on: NaiveDateTime,
    pub last_updated_on: NaiveDateTime,
}

/// A `products` row as read from the store.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_deleted: bool,
    pub created_on: NaiveDateTime,
    pub last_updated_on: NaiveDateTime,
    pub category_id: i64,
}

/// Insert payload for a new category.
#[derive(Debug, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow<'a> {
    pub title: &'a str,
    pub created_on: NaiveDateTime,
    pub last_updated_on: NaiveDateTime,
}

/// Insert payload for a new product.
#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub price: Option<f64>,
    pub image_url: Option<&'a str>,
    pub created_on: NaiveDateTime,
    pub last_updated_on: NaiveDateTime,
    pub category_id: i64,
}

/// Full post-merge update for a product row.
///
/// The nullable columns carry the merged values outright, so `None` writes
/// NULL. The category reference is the exception: `None` keeps the current
/// row.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductChangeset<'a> {
    pub title: &'a str,
    #[diesel(treat_none_as_null = true)]
    pub description: Option<&'a str>,
    #[diesel(treat_none_as_null = true)]
    pub price: Option<f64>,
    #[diesel(treat_none_as_null = true)]
    pub image_url: Option<&'a str>,
    pub category_id: Option<i64>,
    pub last_updated_on: NaiveDateTime,
}

/// Convert a category row to the domain aggregate.
pub fn row_to_category(row: CategoryRow) -> Category {
    Category {
        id: Some(row.id),
        title: row.title,
        is_deleted: row.is_deleted,
        created_on: Some(row.created_on.and_utc()),
        last_updated_on: Some(row.last_updated_on.and_utc()),
    }
}

/// Convert a joined product/category pair to the domain aggregate.
pub fn rows_to_product(product: ProductRow, category: CategoryRow) -> Product {
    Product {
        id: product.id,
        title: product.title,
        description: product.description,
        price: product.price,
        image_url: product.image_url,
        is_deleted: product.is_deleted,
        created_on: Some(product.created_on.and_utc()),
        last_updated_on: Some(product.last_updated_on.and_utc()),
        category: row_to_category(category),
    }
}
