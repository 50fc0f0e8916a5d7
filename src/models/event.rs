//! Event model

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: NaiveDate,
    pub college_id: Option<i64>,
}

/// Wire payload for `POST /events`.
///
/// Every field is optional on the wire so that a missing name or date is reported
/// as a validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub college_id: Option<i64>,
}

/// Validated event insert
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_name: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: NaiveDate,
    pub college_id: Option<i64>,
}
