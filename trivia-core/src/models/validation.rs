//! Validation error types and lenient field coercion

use std::fmt;

use serde_json::Value;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or empty when it shouldn't be
    Empty { field: &'static str },

    /// Integer field is zero (the "unset" value for ids and difficulty)
    Zero { field: &'static str },

    /// Field has the wrong JSON shape
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Zero { field } => write!(f, "{} must be non-zero", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Read an integer field that may arrive as a JSON number or a numeric string.
///
/// `null`, a missing field and an empty string all yield `Ok(None)`.
pub fn integer_field(field: &'static str, value: Option<&Value>) -> Result<Option<i32>, ValidationError> {
    let invalid = ValidationError::InvalidFormat {
        field,
        reason: "expected an integer",
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or(invalid),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid),
        Some(_) => Err(invalid),
    }
}
