use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::services::validation::{ItemPatch, NewItem};
use crate::types::db::item::{self, Entity as Items};

/// Persistence gateway for the items table
///
/// Sole owner of durable item state. Constructed once in main and injected
/// into the API layer; holds no per-request state. "Not found" is reported
/// as a successful `None`, never as an error.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all items ordered by creation time, newest first
    ///
    /// An empty table yields an empty vec, not an error.
    pub async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Items::find()
            .order_by_desc(item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_all", e))
    }

    /// Insert a new item from validated fields
    ///
    /// Assigns the id and created_at server-side and returns the created
    /// record.
    pub async fn insert(&self, fields: NewItem) -> Result<item::Model, InternalError> {
        let record = item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(fields.title),
            detail: Set(fields.detail),
            created_at: Set(Utc::now().timestamp_micros()),
            updated_at: Set(None),
        };

        record
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert", e))
    }

    /// Apply a partial update to the item with the given id
    ///
    /// Only present patch fields change; updated_at is always stamped.
    /// Returns `Ok(None)` when no record matches the id. Last write wins
    /// between racing updaters.
    pub async fn update_by_id(
        &self,
        id: &str,
        patch: ItemPatch,
    ) -> Result<Option<item::Model>, InternalError> {
        let existing = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("update_by_id", e))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut record: item::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            record.title = Set(title);
        }
        if let Some(detail) = patch.detail {
            record.detail = Set(detail);
        }
        record.updated_at = Set(Some(Utc::now().timestamp_micros()));

        let updated = record
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_by_id", e))?;

        Ok(Some(updated))
    }

    /// Delete the item with the given id, returning the deleted record
    ///
    /// Returns `Ok(None)` when no record matches, so deleting an
    /// already-absent id deterministically reports "not found".
    pub async fn delete_by_id(&self, id: &str) -> Result<Option<item::Model>, InternalError> {
        let existing = Items::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_by_id", e))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let result = Items::delete_by_id(&existing.id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_by_id", e))?;

        // A racing deleter may have removed the row after the fetch;
        // only one caller gets to report success
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }
}
