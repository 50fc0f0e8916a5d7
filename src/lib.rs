//! Campus Events
//!
//! Backend of record for campus events. Tracks colleges, students, events and
//! event registrations, and computes registration, attendance, feedback and
//! student-activity reports over them.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RegistryError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::EventRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
