//! Route table

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use super::handlers::{self, AppState};

/// Build the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/events", get(handlers::list_events).post(handlers::create_event))
        .route("/events/{event_id}", delete(handlers::delete_event))
        .route("/events/{event_id}/attendance", post(handlers::mark_attendance))
        .route("/events/{event_id}/absence", post(handlers::mark_absence))
        .route("/events/{event_id}/feedback", post(handlers::record_feedback))
        .route("/colleges", post(handlers::create_college))
        .route("/colleges/{college_id}", delete(handlers::delete_college))
        .route("/students", post(handlers::create_student))
        .route("/students/register", post(handlers::register_student))
        .route("/students/{student_id}", delete(handlers::delete_student))
        .route("/reports/registrations", get(handlers::registrations_report))
        .route("/reports/attendance", get(handlers::attendance_report))
        .route("/reports/feedback", get(handlers::feedback_report))
        .route("/reports/students/top_active", get(handlers::top_active_students_report))
        .route("/reports/events/filter", get(handlers::events_by_type_report))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
