//! Registration model
//!
//! A registration links one student to one event and carries the attendance and
//! feedback state for that pair.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Attendance lifecycle of a registration, stored as the `attendance_status` enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_status")]
pub enum AttendanceStatus {
    #[default]
    #[sqlx(rename = "Registered")]
    Registered,
    #[sqlx(rename = "Attended")]
    Attended,
    #[serde(rename = "Not Attended")]
    #[sqlx(rename = "Not Attended")]
    NotAttended,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Registered => "Registered",
            AttendanceStatus::Attended => "Attended",
            AttendanceStatus::NotAttended => "Not Attended",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub registration_id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub registration_date: NaiveDate,
    pub attendance_status: AttendanceStatus,
    pub feedback_score: Option<i32>,
}

/// Wire payload for `POST /students/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterStudentRequest {
    pub student_id: Option<i64>,
    pub event_id: Option<i64>,
}

/// Wire payload for `POST /events/{event_id}/attendance` and `/absence`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub student_id: Option<i64>,
}

/// Wire payload for `POST /events/{event_id}/feedback`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub score: Option<i32>,
    pub student_id: Option<i64>,
}
