//! Common validation rules shared across request payloads.

use std::borrow::Cow;
use validator::ValidationError;

pub const NOT_NULL_MESSAGE: &str = "must not be null";
pub const NOT_BLANK_MESSAGE: &str = "must not be blank";
pub const NAME_SIZE_MESSAGE: &str = "size must be between 1 and 30";

/// Rejects values that are empty or consist only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed(NOT_BLANK_MESSAGE));
        return Err(err);
    }
    Ok(())
}

/// Upper-cases the first character of a field path, e.g. `name` -> `Name`.
pub fn capitalize_field(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
