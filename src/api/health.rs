use poem::{handler, web::Json};

use crate::types::dto::common::HealthResponse;

/// Health check endpoint
///
/// Mounted at the server root, outside the /api prefix.
#[handler]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
