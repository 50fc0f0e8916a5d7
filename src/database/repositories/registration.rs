//! Registration repository implementation
//!
//! Every write here is a single statement. Uniqueness of (student, event) is left to
//! the `unique_registration` constraint so concurrent inserts cannot both succeed.

use sqlx::PgPool;
use chrono::Utc;
use crate::models::registration::{AttendanceStatus, Registration};
use crate::utils::errors::{is_unique_violation, RegistryError};

const REGISTRATION_COLUMNS: &str =
    "registration_id, student_id, event_id, registration_date, attendance_status, feedback_score";

#[derive(Clone, Debug)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a student for an event with today's date and status `Registered`
    pub async fn create(&self, student_id: i64, event_id: i64) -> Result<Registration, RegistryError> {
        let result = sqlx::query_as::<_, Registration>(&format!(
            r#"
            INSERT INTO registrations (student_id, event_id, registration_date, attendance_status)
            VALUES ($1, $2, $3, $4)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(event_id)
        .bind(Utc::now().date_naive())
        .bind(AttendanceStatus::Registered)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(registration) => Ok(registration),
            Err(err) if is_unique_violation(&err, Some("unique_registration")) => {
                Err(RegistryError::DuplicateRegistration { student_id, event_id })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Find the registration for a (student, event) pair
    pub async fn find(&self, student_id: i64, event_id: i64) -> Result<Option<Registration>, RegistryError> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE student_id = $1 AND event_id = $2"
        ))
        .bind(student_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Set the attendance status of one registration
    pub async fn update_status(&self, student_id: i64, event_id: i64, status: AttendanceStatus) -> Result<Registration, RegistryError> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET attendance_status = $3
            WHERE student_id = $1 AND event_id = $2
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(event_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        registration.ok_or(RegistryError::RegistrationNotFound { student_id, event_id })
    }

    /// Store a feedback score on one registration
    pub async fn update_feedback(&self, student_id: i64, event_id: i64, score: i32) -> Result<Registration, RegistryError> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET feedback_score = $3
            WHERE student_id = $1 AND event_id = $2
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(event_id)
        .bind(score)
        .fetch_optional(&self.pool)
        .await?;

        registration.ok_or(RegistryError::RegistrationNotFound { student_id, event_id })
    }

    /// Get all registrations for an event
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Registration>, RegistryError> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE event_id = $1 ORDER BY registration_id ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Count total registrations
    pub async fn count(&self) -> Result<i64, RegistryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
