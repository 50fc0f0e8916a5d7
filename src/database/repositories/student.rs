//! Student repository implementation

use sqlx::PgPool;
use crate::models::student::{Student, NewStudent};
use crate::utils::errors::{is_unique_violation, RegistryError};

#[derive(Clone, Debug)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new student; a taken email is reported as a conflict
    pub async fn create(&self, student: NewStudent) -> Result<Student, RegistryError> {
        let result = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (student_name, email, college_id)
            VALUES ($1, $2, $3)
            RETURNING student_id, student_name, email, college_id
            "#
        )
        .bind(&student.student_name)
        .bind(&student.email)
        .bind(student.college_id)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => Ok(created),
            Err(err) if is_unique_violation(&err, Some("students_email_key")) => {
                Err(RegistryError::DuplicateEmail { email: student.email })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Delete student and their registrations
    pub async fn delete(&self, id: i64) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total students
    pub async fn count(&self) -> Result<i64, RegistryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
