//! Validation utilities.

use crate::MarqueeError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens `validator` errors into `"field: message"` lines, sorted.
///
/// Nested structs are reported as `parent.field` and list items as
/// `parent[index].field`. Errors without a message fall back to the
/// validator code.
#[must_use]
pub fn field_error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_field_errors("", errors, &mut messages);
    messages.sort();
    messages
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    out.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

/// Converts `validator::ValidationErrors` to a `MarqueeError`.
#[must_use]
pub fn validation_errors_to_marquee_error(errors: &ValidationErrors) -> MarqueeError {
    MarqueeError::Validation(field_error_messages(errors))
}
