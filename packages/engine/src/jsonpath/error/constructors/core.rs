//! Core error constructor functions
//!
//! Primary factory methods for creating JSONPath error types with proper context.

use super::super::types::{ErrorKind, JsonPathError};

impl JsonPathError {
    /// Creates an invalid JSONPath expression error
    ///
    /// # Arguments
    /// * `expression` - The invalid JSONPath expression
    /// * `reason` - Specific reason why the expression is invalid
    /// * `position` - Optional character position where error occurred
    ///
    /// # Examples
    /// ```
    /// use waypath_engine::jsonpath::error::{ErrorKind, JsonPathError};
    ///
    /// let error = JsonPathError::invalid_expression("$...*", "3 consecutive dots", Some(1));
    /// assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
    /// ```
    pub fn invalid_expression(
        expression: impl Into<String>,
        reason: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        let expression = expression.into();
        let reason = reason.into();
        let message = match position {
            Some(position) => format!("invalid path '{expression}': {reason} at position {position}"),
            None => format!("invalid path '{expression}': {reason}"),
        };
        JsonPathError::new(ErrorKind::InvalidPathFormat, message)
    }

    /// Creates an error for a path with more `[?]` placeholders than supplied filters
    ///
    /// # Arguments
    /// * `expression` - The path being compiled
    /// * `placeholders` - Number of `[?]` placeholders in the path
    /// * `supplied` - Number of filters that were available for binding
    pub fn binding_mismatch(
        expression: impl Into<String>,
        placeholders: usize,
        supplied: usize,
    ) -> Self {
        JsonPathError::new(
            ErrorKind::FilterBindingMismatch,
            format!(
                "path '{}' has {placeholders} filter placeholders but only {supplied} filters were supplied",
                expression.into()
            ),
        )
    }

    /// Creates the lookup failure reported when a single-value read matches nothing
    pub fn no_such_path(expression: impl Into<String>) -> Self {
        JsonPathError::new(
            ErrorKind::NoSuchPath,
            format!("no value found at path '{}'", expression.into()),
        )
    }

    /// Creates an error for a regular expression that failed to compile
    pub fn invalid_pattern(pattern: impl Into<String>, source: &regex::Error) -> Self {
        JsonPathError::new(
            ErrorKind::InvalidPattern,
            format!("pattern '{}' failed to compile: {source}", pattern.into()),
        )
    }
}
