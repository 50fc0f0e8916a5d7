//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, run_migrations, health_check};
pub use repositories::{CollegeRepository, StudentRepository, EventRepository, RegistrationRepository, ReportRepository};
pub use seed::seed_reference_data;
pub use service::DatabaseService;
