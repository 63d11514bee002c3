//! Read-side port for category rows.

use async_trait::async_trait;

use crate::domain::product::Category;

/// Errors raised by category persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRepositoryError {
    /// A connection could not be established or checked out.
    #[error("category store connection failed: {message}")]
    Connection { message: String },

    /// A query failed during execution or row conversion.
    #[error("category store query failed: {message}")]
    Query { message: String },
}

impl CategoryRepositoryError {
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

/// Port for category lookups.
///
/// Category writes happen through the product save (cascade-on-create), so
/// this port is read-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ascending by id.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Look up a category by its unique title.
    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Category>, CategoryRepositoryError>;
}
