use std::fmt;

use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::{InternalError, ValidationError};
use crate::types::dto::common::ErrorResponse;

/// Item operation error types
///
/// This is the translation boundary between internal outcomes and the wire:
/// validation failures map to 400, a missing record maps to 404, store
/// failures map to 400 on writes and 500 on reads/deletes, and anything
/// unanticipated maps to a generic 500 with no internal detail leaked.
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Request payload failed validation or the store rejected a write
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// No item matches the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a BadRequest error from a validation failure
    pub fn validation(err: ValidationError) -> Self {
        ItemError::BadRequest(Json(ErrorResponse {
            error: err.to_string(),
        }))
    }

    /// Create a NotFound error for a missing item
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
        }))
    }

    /// Translate a store failure on a write path (insert/update) to 400
    pub fn write_failed(operation: &str, err: InternalError) -> Self {
        tracing::error!("{} error: {}", operation, err);
        ItemError::BadRequest(Json(ErrorResponse {
            error: err.to_string(),
        }))
    }

    /// Translate a store failure on a read/delete path to 500
    pub fn read_failed(operation: &str, err: InternalError) -> Self {
        tracing::error!("{} error: {}", operation, err);
        ItemError::InternalError(Json(ErrorResponse {
            error: err.to_string(),
        }))
    }

    /// Create a generic internal server error
    ///
    /// Catch-all boundary for unanticipated failures; never exposes
    /// internal details to clients.
    pub fn internal_server_error() -> Self {
        ItemError::InternalError(Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::BadRequest(json) => json.0.error.clone(),
            ItemError::NotFound(json) => json.0.error.clone(),
            ItemError::InternalError(json) => json.0.error.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::BadRequest(_) => 400,
            ItemError::NotFound(_) => 404,
            ItemError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
