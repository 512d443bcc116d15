//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::ValidationError;
use inventory::InventoryError;
use orders::OrderError;

/// API-level error type that maps to HTTP responses.
///
/// Persistence failures are deliberately opaque to the client: the
/// response body says only `"internal error"` while the cause goes to
/// the diagnostics log.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid bearer token.
    Unauthorized,
    /// Resource not found.
    NotFound(String),
    /// Request rejected before anything was persisted.
    Validation(ValidationError),
    /// Order coordinator error.
    Order(OrderError),
    /// Inventory coordinator error.
    Inventory(InventoryError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Order(err) => order_error_to_response(err),
            ApiError::Inventory(err) => {
                tracing::error!(error = %err, "inventory operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn order_error_to_response(err: OrderError) -> (StatusCode, String) {
    match &err {
        OrderError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        OrderError::InvalidTransition { .. } => (StatusCode::CONFLICT, err.to_string()),
        OrderError::Store(cause) => {
            tracing::error!(error = %cause, "order persistence failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Order(err)
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError::Inventory(err)
    }
}
