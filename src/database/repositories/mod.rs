//! Database repositories module
//! 
//! This module contains all repository implementations for data access

pub mod college;
pub mod student;
pub mod event;
pub mod registration;
pub mod report;

// Re-export repositories
pub use college::CollegeRepository;
pub use student::StudentRepository;
pub use event::EventRepository;
pub use registration::RegistrationRepository;
pub use report::ReportRepository;
