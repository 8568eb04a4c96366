use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Human-readable status message
    pub message: String,
}

/// Standardized error response model
///
/// Every failure on the wire carries a single `error` key.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
