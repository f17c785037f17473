//! Request Validation Module
//!
//! Presence checks for entry payloads. Nothing here sanitizes or rewrites input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// Validation error types
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq)]
pub enum ValidationError {
    #[error("Title and description are required")]
    MissingRequired { fields: Vec<String> },

    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::MissingRequired { fields } => fields.iter().map(String::as_str).collect(),
            Self::EmptyField { field } => vec![field.as_str()],
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        tracing::warn!(fields = ?e.fields(), "validation failed: {}", e);
        AppError::Validation(e.to_string())
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Request validation trait
pub trait Validatable {
    /// Validate the request data
    fn validate(&self) -> ValidationResult<()>;
}

/// A value counts as present when it exists and is not blank.
///
/// The check trims on purpose: a whitespace-only title or description is treated
/// as missing so that stored entries never carry an empty-looking field.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Collect the names of required fields that are absent or blank.
pub fn missing_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| *name)
        .collect()
}

/// Reject an optional field that was provided but is blank.
pub fn reject_blank(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}
