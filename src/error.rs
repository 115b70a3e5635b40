// HTTP API error types and the client-facing error strings.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

// Error strings are part of the public API contract: existing clients match
// on the exact text (including the long-standing misspelling in
// VARIANT_NOT_EXIST), so these must never be reworded.
pub const CATEGORY_NAME_EXISTS: &str = "Category name already exists";
pub const INVALID_CATEGORY_ID: &str = "Invalid category ID";
pub const NOTHING_TO_UPDATE_IN_CATEGORY: &str = "Nothing to update in category";
pub const INVALID_PARAMETER: &str = "Invalid request parameter";
pub const PRODUCT_NAME_EXISTS: &str = "Product name already exists";
pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const NOTHING_TO_UPDATE_IN_PRODUCT: &str = "Nothing to update in product";
pub const PRODUCT_ID_NOT_EXIST: &str = "Product ID doesn't exist";
pub const INVALID_VARIANT_ID: &str = "Invalid variant ID";
pub const NOTHING_TO_UPDATE_IN_VARIANT: &str = "Nothing to update in variant";
pub const CATEGORY_NOT_EXISTS: &str = "Category doesn't exist";
pub const SUB_CATEGORY_EXISTS: &str =
    "Category can't be deleted since sub category exists for the given category";
pub const PRODUCT_EXISTS_IN_CATEGORY: &str =
    "Category can't be deleted since products exist under this category";
pub const VARIANT_NOT_EXIST: &str = "Given variant doens't exist";
pub const NO_DATA_FOUND: &str = "No data found";

/// API error with an HTTP status and the `{"status":"nok"}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field.
    #[error("{0}")]
    Validation(String),

    /// Duplicate name.
    #[error("{0}")]
    Conflict(String),

    /// Target or referenced entity absent or soft-deleted.
    #[error("{0}")]
    NotFound(String),

    /// Delete blocked by live children/products, or an update with no
    /// effective change.
    #[error("{0}")]
    Precondition(String),

    /// Storage failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) | ApiError::Precondition(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message. Raw database errors are logged, never leaked.
    pub fn message(&self) -> String {
        match self {
            ApiError::Database(e) => {
                tracing::error!("database error: {}", e);
                "An error occurred while processing your request".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.message();
        (status, Json(json!({ "status": "nok", "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict(CATEGORY_NAME_EXISTS.into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::NotFound(CATEGORY_NOT_EXISTS.into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Precondition(SUB_CATEGORY_EXISTS.into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_errors_are_not_leaked() {
        let message = ApiError::Database(sqlx::Error::PoolClosed).message();
        assert_eq!(message, "An error occurred while processing your request");
    }

    #[test]
    fn named_errors_keep_their_exact_text() {
        assert_eq!(
            ApiError::NotFound(VARIANT_NOT_EXIST.into()).message(),
            "Given variant doens't exist"
        );
    }
}
