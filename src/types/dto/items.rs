use chrono::DateTime;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// Request model for creating a new item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Title of the item (required, must not be empty after trimming)
    pub title: String,

    /// Optional free-text detail, defaults to an empty string
    pub detail: Option<String>,
}

/// Request model for partially updating an item
///
/// An absent field means "leave unchanged"; a present-but-empty `detail`
/// sets the detail to an empty string.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New title for the item
    pub title: Option<String>,

    /// New detail text for the item
    pub detail: Option<String>,
}

/// Response model representing a persisted item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Title of the item
    pub title: String,

    /// Free-text detail of the item
    pub detail: String,

    /// Timestamp when the item was created (RFC 3339 format)
    pub created_at: String,

    /// Timestamp of the last update (RFC 3339 format), null if never updated
    pub updated_at: Option<String>,
}

/// Response model for a successful delete
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    /// Confirmation message
    pub message: String,

    /// The deleted item
    pub data: Item,
}

impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            detail: m.detail,
            created_at: format_timestamp(m.created_at),
            updated_at: m.updated_at.map(format_timestamp),
        }
    }
}

fn format_timestamp(micros: i64) -> String {
    DateTime::from_timestamp_micros(micros)
        .unwrap_or_default()
        .to_rfc3339()
}
