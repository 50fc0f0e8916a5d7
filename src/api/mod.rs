//! # REST API
//!
//! Thin axum layer over [`EventRegistry`](crate::services::EventRegistry).
//!
//! # Endpoints
//!
//! ## Events
//! - `GET /events` - List events
//! - `POST /events` - Create event
//! - `DELETE /events/{event_id}` - Delete event and its registrations
//! - `POST /events/{event_id}/attendance` - Mark a student as attended
//! - `POST /events/{event_id}/absence` - Mark a student as not attended
//! - `POST /events/{event_id}/feedback` - Record a feedback score
//!
//! ## Students and colleges
//! - `POST /students/register` - Register a student for an event
//! - `POST /students`, `DELETE /students/{student_id}`
//! - `POST /colleges`, `DELETE /colleges/{college_id}`
//!
//! ## Reports
//! - `GET /reports/registrations`
//! - `GET /reports/attendance`
//! - `GET /reports/feedback`
//! - `GET /reports/students/top_active`
//! - `GET /reports/events/filter?type=`
//!
//! ## Health
//! - `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, CommandResponse, ErrorResponse, JsonBody, PathParam, TypeFilter};
pub use routes::create_router;
