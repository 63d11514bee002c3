//! Catalogue entities and listing parameters.
//!
//! `Product` and `Category` are the domain aggregates served by every
//! catalogue backend. `ProductDraft` is the validated create payload;
//! [`PageRequest`] carries paging and optional sorting for the paged listing
//! operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest description accepted on create.
pub const MAX_DESCRIPTION_LEN: usize = 512;

/// A product category.
///
/// Categories are created implicitly the first time a product names them and
/// are never deleted. Remote backends expose categories as bare titles, so
/// `id` is absent for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned identifier; `None` for remote-only categories.
    pub id: Option<i64>,
    /// Unique category title.
    pub title: String,
    /// Soft-delete flag. Nothing sets it yet; it is part of the schema.
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_updated_on: Option<DateTime<Utc>>,
}

impl Category {
    /// Category known only by title (the remote backend's shape).
    pub fn from_title(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            is_deleted: false,
            created_on: None,
            last_updated_on: None,
        }
    }
}

/// A catalogue product.
///
/// ## Invariants
/// - Always resolves to exactly one [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    /// Soft-delete flag carried from the schema; deletes are hard deletes.
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_updated_on: Option<DateTime<Utc>>,
    pub category: Category,
}

/// Validation failures for [`ProductDraft::new`].
///
/// Not `Eq`: [`InvalidPrice`](Self::InvalidPrice) carries the offending
/// `f64`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductValidationError {
    /// The title is missing or blank.
    #[error("product title must not be empty")]
    EmptyTitle,
    /// The category title is missing or blank.
    #[error("category title must not be empty")]
    EmptyCategoryTitle,
    /// The description exceeds [`MAX_DESCRIPTION_LEN`].
    #[error("description must not exceed {MAX_DESCRIPTION_LEN} characters (got {actual})")]
    DescriptionTooLong { actual: usize },
    /// The price is negative or not a number.
    #[error("price must be a non-negative number (got {price})")]
    InvalidPrice { price: f64 },
}

/// Validated payload for the create-product operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    /// Title of the category this product belongs to; the category is
    /// created on demand when no row carries this title yet.
    pub category_title: String,
}

impl ProductDraft {
    /// Validate and build a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProductValidationError`] when the title or category title is
    /// blank, the description is too long, or the price is negative.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        price: Option<f64>,
        image_url: Option<String>,
        category_title: impl Into<String>,
    ) -> Result<Self, ProductValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProductValidationError::EmptyTitle);
        }
        let category_title = category_title.into();
        if category_title.trim().is_empty() {
            return Err(ProductValidationError::EmptyCategoryTitle);
        }
        if let Some(description) = description.as_deref() {
            let actual = description.chars().count();
            if actual > MAX_DESCRIPTION_LEN {
                return Err(ProductValidationError::DescriptionTooLong { actual });
            }
        }
        // NaN compares false against everything, so check it explicitly.
        if let Some(price) = price {
            if price.is_nan() || price < 0.0 {
                return Err(ProductValidationError::InvalidPrice { price });
            }
        }
        Ok(Self {
            title,
            description,
            price,
            image_url,
            category_title,
        })
    }
}

/// Sort direction for the paged listing.
///
/// Parsing mirrors the HTTP contract: `desc` (any case) sorts descending,
/// anything else ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a direction string; never fails.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Columns the paged listing can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Price,
    CreatedOn,
}

/// Raised when a sort column name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort column: {column}")]
pub struct UnsupportedSortColumn {
    pub column: String,
}

impl SortColumn {
    /// Parse a column name as supplied in the `sortColumn` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSortColumn`] for names outside the known set.
    pub fn parse(value: &str) -> Result<Self, UnsupportedSortColumn> {
        match value {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "price" => Ok(Self::Price),
            "createdOn" | "created_on" => Ok(Self::CreatedOn),
            other => Err(UnsupportedSortColumn {
                column: other.to_owned(),
            }),
        }
    }
}

/// Column plus direction for a sorted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Paging parameters for the paged listing operation.
///
/// Page numbering is zero-based. An out-of-range page yields an empty page,
/// never an error. Without a sort the listing is ascending by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u32,
    pub page_number: u32,
    pub sort: Option<SortSpec>,
}

impl PageRequest {
    /// Unsorted page request.
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
            sort: None,
        }
    }

    /// Attach a sort specification.
    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { column, direction });
        self
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number) * i64::from(self.page_size)
    }
}
