//! Helper functions and utilities
//! 
//! Input checks shared by the registry commands and report arithmetic.

use crate::utils::errors::{RegistryError, Result};

/// Require a present, non-blank text field, returning it trimmed
pub fn require_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(RegistryError::Validation(format!("Missing required field '{}'", field))),
    }
}

/// Require a present value
pub fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| RegistryError::Validation(format!("Missing required field '{}'", field)))
}

/// Treat blank optional text as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// `100 * part / whole` as a real number, or `None` when `whole` is zero
pub fn percentage(part: i64, whole: i64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 * 100.0 / whole as f64)
    }
}

/// Arithmetic mean of `count` values summing to `total`, or `None` when `count` is zero
pub fn mean(total: i64, count: i64) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}
