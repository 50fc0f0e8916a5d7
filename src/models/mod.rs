//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod college;
pub mod student;
pub mod event;
pub mod registration;
pub mod report;

// Re-export commonly used models
pub use college::{College, CreateCollegeRequest, NewCollege};
pub use student::{Student, CreateStudentRequest, NewStudent};
pub use event::{Event, CreateEventRequest, NewEvent};
pub use registration::{Registration, AttendanceStatus, RegisterStudentRequest, AttendanceRequest, FeedbackRequest};
pub use report::{
    EventRegistrationCount, EventTypeRegistrationCount, AttendanceTally, EventAttendance,
    FeedbackTally, EventFeedback, ActiveStudent,
};
