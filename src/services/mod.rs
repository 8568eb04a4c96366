// Services layer - Pure validation and normalization logic
pub mod validation;

pub use validation::{validate_create, validate_update, ItemPatch, NewItem};
