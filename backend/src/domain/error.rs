//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] values to status
//! codes, other adapters are free to map them differently. The service layer
//! raises these; no layer performs recovery or retries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Reserved for update authorisation failures. No rule raises this yet;
    /// it remains part of the declared update contract.
    Forbidden,
    /// The requested product or category does not exist.
    NotFound,
    /// A create operation failed; the message carries the underlying cause.
    CreationFailed,
    /// Anything else that went wrong inside the domain or an adapter.
    InternalError,
}

/// Domain error payload returned to adapters.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Product not found with id: 42");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "Product not found with id: 42")]
    message: String,
}

impl Error {
    /// Create a new error with the given code and message.
    ///
    /// Falls back to a generic message when the caller passes a blank one so
    /// the non-empty invariant holds without a fallible constructor at every
    /// call site.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "unspecified error".to_owned()
        } else {
            message
        };
        Self { code, message }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::CreationFailed`].
    pub fn creation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CreationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Standard message for a missing product id.
    pub fn product_not_found(id: i64) -> Self {
        Self::not_found(format!("Product not found with id: {id}"))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_matching_code() {
        assert_eq!(Error::not_found("x").code(), ErrorCode::NotFound);
        assert_eq!(Error::creation_failed("x").code(), ErrorCode::CreationFailed);
        assert_eq!(Error::forbidden("x").code(), ErrorCode::Forbidden);
        assert_eq!(Error::invalid_request("x").code(), ErrorCode::InvalidRequest);
        assert_eq!(Error::internal("x").code(), ErrorCode::InternalError);
    }

    #[test]
    fn blank_messages_are_replaced() {
        let err = Error::internal("   ");
        assert_eq!(err.message(), "unspecified error");
    }

    #[test]
    fn serialises_as_camel_case_payload() {
        let err = Error::product_not_found(7);
        let value = serde_json::to_value(&err).expect("error serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "code": "not_found",
                "message": "Product not found with id: 7",
            })
        );
    }
}
