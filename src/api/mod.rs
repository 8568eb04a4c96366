// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use items::ItemsApi;

use std::sync::Arc;

use poem::endpoint::StaticFilesEndpoint;
use poem::middleware::CatchPanic;
use poem::{get, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::errors::ItemError;
use crate::stores::ItemStore;

/// Compose the full application endpoint
///
/// API under /api, Swagger UI under /swagger, health at the server root,
/// static frontend assets as the fallback. Panics escaping any handler are
/// caught at this boundary and answered with a generic 500, never a
/// dropped connection.
pub fn build_app(item_store: Arc<ItemStore>, port: u16) -> impl Endpoint {
    let api_service = OpenApiService::new(ItemsApi::new(item_store), "Itemboard API", "1.0.0")
        .server(format!("http://localhost:{}/api", port));

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .at("/health", get(health::health))
        .nest(
            "/",
            StaticFilesEndpoint::new("public").index_file("index.html"),
        )
        .with(CatchPanic::new().with_handler(|_| ItemError::internal_server_error()))
}
