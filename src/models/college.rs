//! College model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct College {
    pub college_id: i64,
    pub college_name: String,
    pub location: Option<String>,
}

/// Wire payload for creating a college; fields are checked by the registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCollegeRequest {
    pub college_name: Option<String>,
    pub location: Option<String>,
}

/// Validated college insert
#[derive(Debug, Clone)]
pub struct NewCollege {
    pub college_name: String,
    pub location: Option<String>,
}
