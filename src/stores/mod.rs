// Stores layer - Data access and repository pattern
pub mod item_store;

pub use item_store::ItemStore;

#[cfg(test)]
mod item_store_test;
