use crate::errors::internal::ValidationError;
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};

/// Normalized fields for inserting a new item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub detail: String,
}

/// Normalized fields for a partial update
///
/// `None` means "leave the stored value unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub detail: Option<String>,
}

/// Validate and normalize a create payload
///
/// Fails when the title is missing or trims to empty. Detail is trimmed
/// and defaults to an empty string when absent.
pub fn validate_create(req: &CreateItemRequest) -> Result<NewItem, ValidationError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }

    Ok(NewItem {
        title: title.to_string(),
        detail: req
            .detail
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .to_string(),
    })
}

/// Validate and normalize a partial-update payload
///
/// Each present field is trimmed; absent fields pass through untouched.
/// A present title that trims to empty is rejected so a persisted item
/// can never end up with a blank title.
pub fn validate_update(req: &UpdateItemRequest) -> Result<ItemPatch, ValidationError> {
    let title = match req.title.as_deref() {
        Some(t) => {
            let t = t.trim();
            if t.is_empty() {
                return Err(ValidationError::TitleRequired);
            }
            Some(t.to_string())
        }
        None => None,
    };

    let detail = req.detail.as_deref().map(|d| d.trim().to_string());

    Ok(ItemPatch { title, detail })
}
