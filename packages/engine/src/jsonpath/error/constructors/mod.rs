//! Error constructor functions module
//!
//! Free-function shorthands for the context-carrying constructors in `core`.

mod core;

use super::types::JsonPathError;

pub fn invalid_path_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    JsonPathError::invalid_expression(expression, reason, position)
}

pub fn binding_mismatch_error(
    expression: impl Into<String>,
    placeholders: usize,
    supplied: usize,
) -> JsonPathError {
    JsonPathError::binding_mismatch(expression, placeholders, supplied)
}

pub fn no_such_path_error(expression: impl Into<String>) -> JsonPathError {
    JsonPathError::no_such_path(expression)
}

pub fn invalid_pattern_error(pattern: impl Into<String>, source: &regex::Error) -> JsonPathError {
    JsonPathError::invalid_pattern(pattern, source)
}

pub fn internal_error(expression: impl Into<String>, reason: impl Into<String>) -> JsonPathError {
    JsonPathError::internal(format!(
        "'{}': {}",
        expression.into(),
        reason.into()
    ))
}
