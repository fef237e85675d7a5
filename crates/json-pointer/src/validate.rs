//! Validation functions for JSON Pointer.

use serde_json::Value;

use crate::JsonPointerError;

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns [`JsonPointerError::MalformedPointer`] if the pointer is
/// non-empty but doesn't start with `/`.
///
/// # Example
///
/// ```
/// use json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // Valid absolute pointer
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() || pointer.starts_with('/') {
        return Ok(());
    }
    tracing::debug!(pointer, "rejected malformed json pointer");
    Err(JsonPointerError::MalformedPointer {
        pointer: pointer.to_string(),
    })
}

/// Validate that a JSON value holds a pointer string and return it.
///
/// # Errors
///
/// Returns [`JsonPointerError::MalformedPointer`] for any non-string value
/// and for strings rejected by [`validate_json_pointer`].
pub fn validate_pointer_value(value: &Value) -> Result<&str, JsonPointerError> {
    match value {
        Value::String(s) => {
            validate_json_pointer(s)?;
            Ok(s)
        }
        other => {
            tracing::debug!(%other, "rejected non-string json pointer");
            Err(JsonPointerError::MalformedPointer {
                pointer: other.to_string(),
            })
        }
    }
}
