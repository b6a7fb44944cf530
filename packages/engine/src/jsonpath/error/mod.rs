//! JSONPath error handling module
//!
//! Error kinds, the error type, and constructor helpers shared by the tokenizer,
//! compiler and evaluator.

pub mod constructors;
mod types;

pub use constructors::{
    binding_mismatch_error, internal_error, invalid_path_error, invalid_pattern_error,
    no_such_path_error,
};
pub use types::{ErrorKind, JsonPathError, JsonPathResult};
