// Data transfer objects - wire-facing request/response models
pub mod common;
pub mod items;
