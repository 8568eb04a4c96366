use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};

use crate::errors::api::ItemError;
use crate::services::validation::{validate_create, validate_update};
use crate::stores::ItemStore;
use crate::types::dto::items::{CreateItemRequest, DeleteItemResponse, Item, UpdateItemRequest};

/// Items API endpoints
///
/// Each handler is single-pass and non-retrying: validate, call the store,
/// map the outcome. No item state is held across requests.
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given store
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

/// Response for a successful create
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),
}

#[OpenApi]
impl ItemsApi {
    /// List all items, newest first
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemError> {
        let records = self
            .item_store
            .list_all()
            .await
            .map_err(|e| ItemError::read_failed("list_items", e))?;

        Ok(Json(records.into_iter().map(Item::from).collect()))
    }

    /// Create a new item
    ///
    /// Requires a non-empty title; detail defaults to an empty string.
    /// Returns the created item with server-assigned id and created_at.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemError> {
        let fields = validate_create(&body).map_err(ItemError::validation)?;

        let created = self
            .item_store
            .insert(fields)
            .await
            .map_err(|e| ItemError::write_failed("create_item", e))?;

        Ok(CreateItemResponse::Created(Json(created.into())))
    }

    /// Partially update an item
    ///
    /// Only supplied fields change; updated_at is always refreshed.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemError> {
        let patch = validate_update(&body).map_err(ItemError::validation)?;

        let updated = self
            .item_store
            .update_by_id(&id, patch)
            .await
            .map_err(|e| ItemError::write_failed("update_item", e))?;

        match updated {
            Some(record) => Ok(Json(record.into())),
            None => Err(ItemError::not_found()),
        }
    }

    /// Delete an item
    ///
    /// Deleting an already-absent id reports 404, never a second success.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<DeleteItemResponse>, ItemError> {
        let deleted = self
            .item_store
            .delete_by_id(&id)
            .await
            .map_err(|e| ItemError::read_failed("delete_item", e))?;

        match deleted {
            Some(record) => Ok(Json(DeleteItemResponse {
                message: "Item deleted successfully".to_string(),
                data: record.into(),
            })),
            None => Err(ItemError::not_found()),
        }
    }
}
