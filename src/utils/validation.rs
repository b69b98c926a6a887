// src/utils/validation.rs

use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Runs the `validator` rules of a payload and turns the first failing field
/// (alphabetical, so the message is stable) into `AppError::Validation`.
///
/// `entity` is the human name used in the message, e.g. `"user"`.
pub fn validate_payload<T: Validate>(payload: &T, entity: &str) -> Result<(), AppError> {
    let errors = match payload.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    let Some((field, field_errs)) = field_errors.iter().min_by(|a, b| a.0.cmp(b.0)) else {
        return Err(AppError::Validation(errors.to_string()));
    };

    let Some(first) = field_errs.first() else {
        return Err(AppError::Validation(errors.to_string()));
    };
    let message = match &*first.code {
        "required" => format!("The '{}' property of the {} was not properly written", field, entity),
        "length" if is_blank(first) => {
            format!("The '{}' property of the {} cannot be empty", field, entity)
        }
        "length" => format!("The '{}' property of the {} is too long", field, entity),
        "range" => format!("The '{}' property of the {} must be a positive id", field, entity),
        _ => format!("The '{}' property of the {} is invalid", field, entity),
    };

    Err(AppError::Validation(message))
}

// A failed `length` rule on a non-empty value can only be the upper bound.
fn is_blank(error: &ValidationError) -> bool {
    error
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .is_none_or(str::is_empty)
}

/// Unwraps a field that `validate_payload` has already checked.
pub fn present<T>(value: Option<T>, field: &str, entity: &str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::Validation(format!(
            "The '{}' property of the {} was not properly written",
            field, entity
        ))
    })
}
