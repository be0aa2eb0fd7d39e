//! Database access layer

pub mod dining_table;

// Re-exports
pub use dining_table::{fetch_main_floor_tables, try_fetch_main_floor_tables};

use thiserror::Error;

/// Data access error types
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Connection string '{0}' not found or is empty")]
    MissingConnectionString(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
