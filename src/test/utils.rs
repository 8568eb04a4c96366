// Test utilities shared across unit tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::stores::ItemStore;

/// Creates an in-memory test database with migrations applied and an
/// ItemStore on top of it
///
/// Callers can discard the connection if they only need the store:
/// ```rust,ignore
/// let (_db, store) = setup_test_store().await;
/// ```
pub async fn setup_test_store() -> (DatabaseConnection, Arc<ItemStore>) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(ItemStore::new(db.clone()));

    (db, store)
}
