//! Event repository implementation

use sqlx::PgPool;
use crate::models::event::{Event, NewEvent};
use crate::utils::errors::RegistryError;

const EVENT_COLUMNS: &str = "event_id, event_name, description, event_type, event_date, college_id";

#[derive(Clone, Debug)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. An unknown college is rejected by the foreign key.
    pub async fn create(&self, event: NewEvent) -> Result<Event, RegistryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (event_name, description, event_type, event_date, college_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(event.event_name)
        .bind(event.description)
        .bind(event.event_type)
        .bind(event.event_date)
        .bind(event.college_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events, earliest first
    pub async fn list(&self) -> Result<Vec<Event>, RegistryError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date ASC, event_id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Delete event and its registrations
    pub async fn delete(&self, id: i64) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, RegistryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
