//! Report rows
//!
//! SQL returns integer tallies; percentages and means are derived here so the
//! reported values are exactly `100 * attended / total` and `sum / count`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::utils::helpers::{mean, percentage};

/// Registrations per event (left join, zero counts included)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventRegistrationCount {
    pub event_id: i64,
    pub event_name: String,
    pub total_registrations: i64,
}

/// Registrations per event restricted to one event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventTypeRegistrationCount {
    pub event_id: i64,
    pub event_name: String,
    pub event_type: String,
    pub total_registrations: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct AttendanceTally {
    pub event_id: i64,
    pub event_name: String,
    pub attended: i64,
    pub total_registrations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAttendance {
    pub event_id: i64,
    pub event_name: String,
    pub attended: i64,
    pub total_registrations: i64,
    pub attendance_percentage: f64,
}

impl EventAttendance {
    /// Events without registrations have no defined percentage and yield `None`
    pub fn from_tally(tally: AttendanceTally) -> Option<Self> {
        let attendance_percentage = percentage(tally.attended, tally.total_registrations)?;
        Some(Self {
            event_id: tally.event_id,
            event_name: tally.event_name,
            attended: tally.attended,
            total_registrations: tally.total_registrations,
            attendance_percentage,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct FeedbackTally {
    pub event_id: i64,
    pub event_name: String,
    pub score_total: i64,
    pub responses: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFeedback {
    pub event_id: i64,
    pub event_name: String,
    pub responses: i64,
    pub average_score: f64,
}

impl EventFeedback {
    /// Events without any scored registration yield `None`
    pub fn from_tally(tally: FeedbackTally) -> Option<Self> {
        let average_score = mean(tally.score_total, tally.responses)?;
        Some(Self {
            event_id: tally.event_id,
            event_name: tally.event_name,
            responses: tally.responses,
            average_score,
        })
    }
}

/// Student ranked by attended events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ActiveStudent {
    pub student_id: i64,
    pub student_name: String,
    pub events_attended: i64,
}
