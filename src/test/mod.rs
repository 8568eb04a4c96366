// Test support - only compiled for unit tests
pub mod utils;
