//! Error handling for the event registry
//! 
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
    
    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Referenced record does not exist: {0}")]
    Reference(String),

    #[error("Student {student_id} is already registered for event {event_id}")]
    DuplicateRegistration { student_id: i64, event_id: i64 },

    #[error("A student with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("Registration not found for student {student_id} and event {event_id}")]
    RegistrationNotFound { student_id: i64, event_id: i64 },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => RegistryError::Connection(err),
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RegistryError::Reference(db_err.message().to_string())
            }
            _ => RegistryError::Database(err),
        }
    }
}

/// Returns true when the error is a uniqueness violation, optionally of a named constraint
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => match constraint {
            Some(name) => db_err.constraint() == Some(name),
            None => true,
        },
        _ => false,
    }
}

impl RegistryError {
    /// Check if the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RegistryError::Validation(_)
                | RegistryError::DuplicateRegistration { .. }
                | RegistryError::DuplicateEmail { .. }
                | RegistryError::RegistrationNotFound { .. }
                | RegistryError::NotFound { .. }
        )
    }
    
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::Connection(_) => ErrorSeverity::Critical,
            RegistryError::Migration(_) => ErrorSeverity::Critical,
            RegistryError::Config(_) => ErrorSeverity::Critical,
            RegistryError::DuplicateRegistration { .. } => ErrorSeverity::Warning,
            RegistryError::DuplicateEmail { .. } => ErrorSeverity::Warning,
            RegistryError::Reference(_) => ErrorSeverity::Warning,
            RegistryError::Validation(_) => ErrorSeverity::Info,
            RegistryError::RegistrationNotFound { .. } => ErrorSeverity::Info,
            RegistryError::NotFound { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_pool_failures_classify_as_connection_errors() {
        assert_matches!(RegistryError::from(sqlx::Error::PoolTimedOut), RegistryError::Connection(_));
        assert_matches!(RegistryError::from(sqlx::Error::PoolClosed), RegistryError::Connection(_));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_matches!(RegistryError::from(sqlx::Error::Io(io)), RegistryError::Connection(_));
    }

    #[test]
    fn test_row_not_found_is_a_database_error() {
        let err = RegistryError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, RegistryError::Database(_));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound, None));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut, Some("unique_registration")));
    }

    #[test]
    fn test_client_errors() {
        assert!(RegistryError::Validation("name".into()).is_client_error());
        assert!(RegistryError::DuplicateRegistration { student_id: 1, event_id: 2 }.is_client_error());
        assert!(RegistryError::RegistrationNotFound { student_id: 1, event_id: 2 }.is_client_error());
        assert!(!RegistryError::Reference("fk".into()).is_client_error());
        assert!(!RegistryError::Config("bad".into()).is_client_error());
    }

    #[test]
    fn test_error_messages_carry_keys() {
        let err = RegistryError::DuplicateRegistration { student_id: 101, event_id: 1 };
        assert_eq!(err.to_string(), "Student 101 is already registered for event 1");

        let err = RegistryError::NotFound { entity: "College", id: 7 };
        assert_eq!(err.to_string(), "College not found: 7");
        assert_eq!(err.severity().to_string(), "INFO");
    }
}
