//! Validation framework for request payloads.
//!
//! Constraints are declared with the `validator` derive on the payload types;
//! this module holds the custom rules and the formatting used when violations
//! are reported back to the client.

pub mod rules;

pub use validator::{Validate, ValidationErrors};

/// Flattens validation errors into `"<Field> - <message>"` lines.
///
/// Every violation is reported, not only the first one per field. Lines are
/// sorted so the combined message is stable across runs.
pub fn format_violations(errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = rules::capitalize_field(&field);
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{} - {}", field, message)
            })
        })
        .collect();
    lines.sort();
    lines
}
