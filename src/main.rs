use std::sync::Arc;

use poem::{listener::TcpListener, Server};
use sea_orm::{Database, DatabaseConnection};

use migration::{Migrator, MigratorTrait};

use itemboard_backend::api::build_app;
use itemboard_backend::config::{init_logging, ServerSettings};
use itemboard_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = ServerSettings::from_env();

    // Connect to the backing store
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url);

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    // Stores are created once here and injected into the API layer
    let app_data = Arc::new(AppData::init(db));
    let app = build_app(app_data.item_store.clone(), settings.port);

    let addr = format!("0.0.0.0:{}", settings.port);
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.port
    );

    Server::new(TcpListener::bind(addr)).run(app).await
}
