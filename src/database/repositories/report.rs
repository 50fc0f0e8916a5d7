//! Report queries
//!
//! Read-only aggregations over events, students and registrations. Rows are grouped
//! by id, never by name, and every ordering has an id tie-break so results are stable.

use sqlx::PgPool;
use crate::models::report::{
    ActiveStudent, AttendanceTally, EventAttendance, EventFeedback, EventRegistrationCount,
    EventTypeRegistrationCount, FeedbackTally,
};
use crate::utils::errors::RegistryError;

/// Number of students returned by the most-active report
pub const TOP_ACTIVE_LIMIT: i64 = 3;

#[derive(Clone, Debug)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrations per event, including events nobody registered for
    pub async fn registrations_per_event(&self) -> Result<Vec<EventRegistrationCount>, RegistryError> {
        let rows = sqlx::query_as::<_, EventRegistrationCount>(
            r#"
            SELECT e.event_id, e.event_name, COUNT(r.registration_id) AS total_registrations
            FROM events e
            LEFT JOIN registrations r ON r.event_id = e.event_id
            GROUP BY e.event_id, e.event_name
            ORDER BY total_registrations DESC, e.event_id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Attendance percentage for every event with at least one registration
    pub async fn attendance_percentage(&self) -> Result<Vec<EventAttendance>, RegistryError> {
        let tallies = sqlx::query_as::<_, AttendanceTally>(
            r#"
            SELECT
                e.event_id,
                e.event_name,
                COUNT(*) FILTER (WHERE r.attendance_status = 'Attended') AS attended,
                COUNT(r.registration_id) AS total_registrations
            FROM events e
            INNER JOIN registrations r ON r.event_id = e.event_id
            GROUP BY e.event_id, e.event_name
            ORDER BY e.event_id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tallies.into_iter().filter_map(EventAttendance::from_tally).collect())
    }

    /// Mean feedback score for every event with at least one scored registration
    pub async fn average_feedback(&self) -> Result<Vec<EventFeedback>, RegistryError> {
        let tallies = sqlx::query_as::<_, FeedbackTally>(
            r#"
            SELECT
                e.event_id,
                e.event_name,
                SUM(r.feedback_score)::BIGINT AS score_total,
                COUNT(r.feedback_score) AS responses
            FROM events e
            INNER JOIN registrations r ON r.event_id = e.event_id
            WHERE r.feedback_score IS NOT NULL
            GROUP BY e.event_id, e.event_name
            ORDER BY e.event_id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tallies.into_iter().filter_map(EventFeedback::from_tally).collect())
    }

    /// Students with the most attended events; students who attended nothing are left out
    pub async fn top_active_students(&self) -> Result<Vec<ActiveStudent>, RegistryError> {
        let rows = sqlx::query_as::<_, ActiveStudent>(
            r#"
            SELECT s.student_id, s.student_name, COUNT(r.registration_id) AS events_attended
            FROM students s
            INNER JOIN registrations r ON r.student_id = s.student_id
            WHERE r.attendance_status = 'Attended'
            GROUP BY s.student_id, s.student_name
            ORDER BY events_attended DESC, s.student_id ASC
            LIMIT $1
            "#
        )
        .bind(TOP_ACTIVE_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Registrations per event for events of exactly this type (case-sensitive)
    pub async fn events_by_type(&self, event_type: &str) -> Result<Vec<EventTypeRegistrationCount>, RegistryError> {
        let rows = sqlx::query_as::<_, EventTypeRegistrationCount>(
            r#"
            SELECT e.event_id, e.event_name, e.event_type, COUNT(r.registration_id) AS total_registrations
            FROM events e
            LEFT JOIN registrations r ON r.event_id = e.event_id
            WHERE e.event_type = $1
            GROUP BY e.event_id, e.event_name, e.event_type
            ORDER BY total_registrations DESC, e.event_id ASC
            "#
        )
        .bind(event_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
