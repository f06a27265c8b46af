pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export key types for easy access
pub use application::loader::{LoaderError, LoaderStatus, SheetsLoader};
pub use config::{ConfigSource, MemorySource, SecretsFile, Settings};
pub use domain::table::WorksheetTable;
