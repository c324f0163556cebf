pub mod catalog;
pub mod config;
pub mod error;
pub mod schema_extractor;
pub mod types;
