// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use itemboard_backend::stores::ItemStore;

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a test item store backed by an in-memory database
pub async fn setup_test_store() -> Arc<ItemStore> {
    let db = setup_test_db().await;
    Arc::new(ItemStore::new(db))
}
