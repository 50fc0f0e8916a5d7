//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub student_name: String,
    pub email: String,
    pub college_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub college_id: Option<i64>,
}

/// Validated student insert
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_name: String,
    pub email: String,
    pub college_id: Option<i64>,
}
