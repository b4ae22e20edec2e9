//! Required-field validator for write payloads
//!
//! Validation semantics:
//! - A field is missing if it is absent or equal to the empty string
//! - `0`, `false` and `null` count as present
//! - One message per missing field, in the order the fields were requested
//! - Pure and deterministic; no I/O

use serde_json::Value;

use super::errors::ValidationError;

/// Outcome of checking a payload against its required fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { messages: Vec<String> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Messages for the missing fields (empty when valid)
    pub fn messages(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid { messages } => messages,
        }
    }

    /// Convert into a `Result` for `?` propagation
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { messages } => {
                Err(ValidationError::MissingFields { messages })
            }
        }
    }
}

/// Check that every name in `required` is present and non-empty in `payload`.
///
/// A payload that is not a JSON object has no fields, so every required
/// field is reported missing.
pub fn validate(payload: &Value, required: &[&str]) -> ValidationResult {
    let messages: Vec<String> = required
        .iter()
        .filter(|field| is_missing(payload.get(**field)))
        .map(|field| format!("No {} specified.", field))
        .collect();

    if messages.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid { messages }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
