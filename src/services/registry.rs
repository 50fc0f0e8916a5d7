//! Event registry service
//!
//! The single entry point for commands and reports. Inputs are validated here
//! before any storage access; referential integrity and uniqueness are left to the
//! database constraints.

use crate::database::DatabaseService;
use crate::models::*;
use crate::utils::errors::{RegistryError, Result};
use crate::utils::helpers::{optional_text, require, require_text};
use crate::utils::logging::{log_registry_command, log_report_query};

#[derive(Debug, Clone)]
pub struct EventRegistry {
    db: DatabaseService,
}

impl EventRegistry {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Storage reachability
    pub async fn health(&self) -> Result<()> {
        self.db.health_check().await
    }

    /// Row counts per table
    pub async fn stats(&self) -> Result<serde_json::Value> {
        self.db.get_stats().await
    }

    /// Create a college
    pub async fn create_college(&self, request: CreateCollegeRequest) -> Result<College> {
        let college = NewCollege {
            college_name: require_text("college_name", request.college_name)?,
            location: optional_text(request.location),
        };

        let result = self.db.colleges.create(college).await;
        log_registry_command("create_college", None, None, &result);
        result
    }

    /// Create a student; email must be unused
    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<Student> {
        let student = NewStudent {
            student_name: require_text("student_name", request.student_name)?,
            email: require_text("email", request.email)?,
            college_id: request.college_id,
        };

        let result = self.db.students.create(student).await;
        log_registry_command("create_student", result.as_ref().ok().map(|s| s.student_id), None, &result);
        result
    }

    /// Create an event. Fails with `Validation` when the name or date is missing and
    /// with `Reference` when the college does not exist.
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let event = NewEvent {
            event_name: require_text("event_name", request.event_name)?,
            event_date: require("event_date", request.event_date)?,
            description: optional_text(request.description),
            event_type: optional_text(request.event_type),
            college_id: request.college_id,
        };

        let result = self.db.events.create(event).await;
        log_registry_command("create_event", None, result.as_ref().ok().map(|e| e.event_id), &result);
        result
    }

    /// All events, earliest first
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.db.events.list().await
    }

    /// Register a student for an event.
    ///
    /// A second registration for the same pair fails with `DuplicateRegistration`
    /// and leaves the first one untouched.
    pub async fn register_student(&self, request: RegisterStudentRequest) -> Result<Registration> {
        let student_id = require("student_id", request.student_id)?;
        let event_id = require("event_id", request.event_id)?;

        let result = self.db.registrations.create(student_id, event_id).await;
        log_registry_command("register_student", Some(student_id), Some(event_id), &result);
        result
    }

    /// Mark the student as having attended the event
    pub async fn mark_attendance(&self, event_id: i64, request: AttendanceRequest) -> Result<Registration> {
        self.set_attendance("mark_attendance", event_id, request, AttendanceStatus::Attended).await
    }

    /// Mark the student as absent from the event
    pub async fn mark_absence(&self, event_id: i64, request: AttendanceRequest) -> Result<Registration> {
        self.set_attendance("mark_absence", event_id, request, AttendanceStatus::NotAttended).await
    }

    async fn set_attendance(&self, command: &str, event_id: i64, request: AttendanceRequest, status: AttendanceStatus) -> Result<Registration> {
        let student_id = require("student_id", request.student_id)?;

        let result = self.db.registrations.update_status(student_id, event_id, status).await;
        log_registry_command(command, Some(student_id), Some(event_id), &result);
        result
    }

    /// Store the feedback score verbatim; no range is enforced
    pub async fn record_feedback(&self, event_id: i64, request: FeedbackRequest) -> Result<Registration> {
        let student_id = require("student_id", request.student_id)?;
        let score = require("score", request.score)?;

        let result = self.db.registrations.update_feedback(student_id, event_id, score).await;
        log_registry_command("record_feedback", Some(student_id), Some(event_id), &result);
        result
    }

    pub async fn delete_college(&self, college_id: i64) -> Result<()> {
        let result = match self.db.colleges.delete(college_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RegistryError::NotFound { entity: "College", id: college_id }),
            Err(err) => Err(err),
        };
        log_registry_command("delete_college", None, None, &result);
        result
    }

    pub async fn delete_student(&self, student_id: i64) -> Result<()> {
        let result = match self.db.students.delete(student_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RegistryError::NotFound { entity: "Student", id: student_id }),
            Err(err) => Err(err),
        };
        log_registry_command("delete_student", Some(student_id), None, &result);
        result
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        let result = match self.db.events.delete(event_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RegistryError::NotFound { entity: "Event", id: event_id }),
            Err(err) => Err(err),
        };
        log_registry_command("delete_event", None, Some(event_id), &result);
        result
    }

    pub async fn registrations_per_event(&self) -> Result<Vec<EventRegistrationCount>> {
        let rows = self.db.reports.registrations_per_event().await?;
        log_report_query("registrations_per_event", rows.len());
        Ok(rows)
    }

    pub async fn attendance_percentage(&self) -> Result<Vec<EventAttendance>> {
        let rows = self.db.reports.attendance_percentage().await?;
        log_report_query("attendance_percentage", rows.len());
        Ok(rows)
    }

    pub async fn average_feedback(&self) -> Result<Vec<EventFeedback>> {
        let rows = self.db.reports.average_feedback().await?;
        log_report_query("average_feedback", rows.len());
        Ok(rows)
    }

    pub async fn top_active_students(&self) -> Result<Vec<ActiveStudent>> {
        let rows = self.db.reports.top_active_students().await?;
        log_report_query("top_active_students", rows.len());
        Ok(rows)
    }

    /// Registrations per event for one event type; the type is required
    pub async fn events_by_type(&self, event_type: Option<String>) -> Result<Vec<EventTypeRegistrationCount>> {
        let event_type = match event_type {
            Some(value) if !value.is_empty() => value,
            _ => return Err(RegistryError::Validation("Missing 'type' query parameter.".to_string())),
        };

        let rows = self.db.reports.events_by_type(&event_type).await?;
        log_report_query("events_by_type", rows.len());
        Ok(rows)
    }
}
