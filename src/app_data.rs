use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API
/// layer. The store is an explicitly constructed, injectable instance so
/// tests can build one against an in-memory database.
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be established and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::info!("Initializing AppData");
        let item_store = Arc::new(ItemStore::new(db.clone()));

        Self { db, item_store }
    }
}
