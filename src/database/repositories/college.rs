//! College repository implementation

use sqlx::PgPool;
use crate::models::college::{College, NewCollege};
use crate::utils::errors::RegistryError;

#[derive(Clone, Debug)]
pub struct CollegeRepository {
    pool: PgPool,
}

impl CollegeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new college
    pub async fn create(&self, college: NewCollege) -> Result<College, RegistryError> {
        let college = sqlx::query_as::<_, College>(
            r#"
            INSERT INTO colleges (college_name, location)
            VALUES ($1, $2)
            RETURNING college_id, college_name, location
            "#
        )
        .bind(college.college_name)
        .bind(college.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(college)
    }

    /// Delete college; students, events and their registrations go with it.
    ///
    /// Returns false when no college had this id.
    pub async fn delete(&self, id: i64) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM colleges WHERE college_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total colleges
    pub async fn count(&self) -> Result<i64, RegistryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colleges")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
