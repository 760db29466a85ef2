//! Request validation built on the `validator` crate.
//!
//! Input DTOs derive [`Validate`] with declarative field constraints; handlers
//! call [`validate_request`] before touching storage so that any constraint
//! violation surfaces as [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the declarative constraints on `input`.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: code, code; field: code`, sorted by
/// field name so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
            format!("{field}: {}", codes.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}
