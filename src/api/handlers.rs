//! Request handlers and error mapping

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::models::*;
use crate::services::EventRegistry;
use crate::utils::errors::RegistryError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: EventRegistry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl CommandResponse {
    fn new(message: &str, id: Option<i64>) -> Self {
        Self { message: message.to_string(), id }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TypeFilter {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// JSON body whose rejections are reported as validation failures
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Path parameter whose rejections are reported as validation failures
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

/// Registry failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::RegistrationNotFound { .. } | RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::DuplicateRegistration { .. } | RegistryError::DuplicateEmail { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(RegistryError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(RegistryError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        let body = match &self.0 {
            RegistryError::DuplicateRegistration { .. } => "Student is already registered for this event.".to_string(),
            RegistryError::RegistrationNotFound { .. } => "Registration not found.".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: body })).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let checked = match state.registry.health().await {
        Ok(()) => state.registry.stats().await,
        Err(err) => Err(err),
    };
    match checked {
        Ok(records) => (StatusCode::OK, Json(serde_json::json!({ "status": "healthy", "records": records }))),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({ "status": "unhealthy" })))
        }
    }
}

pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.registry.list_events().await?))
}

pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<CommandResponse>)> {
    let event = state.registry.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(CommandResponse::new("Event created successfully", Some(event.event_id)))))
}

pub async fn delete_event(State(state): State<AppState>, PathParam(event_id): PathParam<i64>) -> ApiResult<Json<CommandResponse>> {
    state.registry.delete_event(event_id).await?;
    Ok(Json(CommandResponse::new("Event deleted successfully", None)))
}

pub async fn create_college(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCollegeRequest>,
) -> ApiResult<(StatusCode, Json<CommandResponse>)> {
    let college = state.registry.create_college(request).await?;
    Ok((StatusCode::CREATED, Json(CommandResponse::new("College created successfully", Some(college.college_id)))))
}

pub async fn delete_college(State(state): State<AppState>, PathParam(college_id): PathParam<i64>) -> ApiResult<Json<CommandResponse>> {
    state.registry.delete_college(college_id).await?;
    Ok(Json(CommandResponse::new("College deleted successfully", None)))
}

pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<CommandResponse>)> {
    let student = state.registry.create_student(request).await?;
    Ok((StatusCode::CREATED, Json(CommandResponse::new("Student created successfully", Some(student.student_id)))))
}

pub async fn delete_student(State(state): State<AppState>, PathParam(student_id): PathParam<i64>) -> ApiResult<Json<CommandResponse>> {
    state.registry.delete_student(student_id).await?;
    Ok(Json(CommandResponse::new("Student deleted successfully", None)))
}

pub async fn register_student(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterStudentRequest>,
) -> ApiResult<(StatusCode, Json<CommandResponse>)> {
    let registration = state.registry.register_student(request).await?;
    Ok((StatusCode::CREATED, Json(CommandResponse::new("Student registered successfully", Some(registration.registration_id)))))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
    JsonBody(request): JsonBody<AttendanceRequest>,
) -> ApiResult<Json<CommandResponse>> {
    state.registry.mark_attendance(event_id, request).await?;
    Ok(Json(CommandResponse::new("Attendance marked successfully", None)))
}

pub async fn mark_absence(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
    JsonBody(request): JsonBody<AttendanceRequest>,
) -> ApiResult<Json<CommandResponse>> {
    state.registry.mark_absence(event_id, request).await?;
    Ok(Json(CommandResponse::new("Absence marked successfully", None)))
}

pub async fn record_feedback(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
    JsonBody(request): JsonBody<FeedbackRequest>,
) -> ApiResult<Json<CommandResponse>> {
    state.registry.record_feedback(event_id, request).await?;
    Ok(Json(CommandResponse::new("Feedback submitted successfully", None)))
}

pub async fn registrations_report(State(state): State<AppState>) -> ApiResult<Json<Vec<EventRegistrationCount>>> {
    Ok(Json(state.registry.registrations_per_event().await?))
}

pub async fn attendance_report(State(state): State<AppState>) -> ApiResult<Json<Vec<EventAttendance>>> {
    Ok(Json(state.registry.attendance_percentage().await?))
}

pub async fn feedback_report(State(state): State<AppState>) -> ApiResult<Json<Vec<EventFeedback>>> {
    Ok(Json(state.registry.average_feedback().await?))
}

pub async fn top_active_students_report(State(state): State<AppState>) -> ApiResult<Json<Vec<ActiveStudent>>> {
    Ok(Json(state.registry.top_active_students().await?))
}

pub async fn events_by_type_report(
    State(state): State<AppState>,
    Query(filter): Query<TypeFilter>,
) -> ApiResult<Json<Vec<EventTypeRegistrationCount>>> {
    Ok(Json(state.registry.events_by_type(filter.event_type).await?))
}
