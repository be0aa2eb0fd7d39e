//! Floor status data access for a restaurant point of sale
//!
//! Fetches the current seating/reservation snapshot of the main dining
//! floor (tables 1 through 11) from the store database.

pub mod config;
pub mod db;
pub mod models;

// Re-exports
pub use config::{Config, DEFAULT_CONNECTION};
pub use db::{FetchError, fetch_main_floor_tables, try_fetch_main_floor_tables};
pub use models::DiningTableStatus;
