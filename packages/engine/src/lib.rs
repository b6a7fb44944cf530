//! # Waypath engine
//!
//! Compiles `JSONPath` expressions and evaluates them against in-memory
//! documents.
//!
//! - Dotted and bracketed property access, wildcards, recursive descent
//! - Array indices, index unions and clamped slices
//! - Predicates bound to `[?]` placeholders or written inline as `[?(...)]`
//! - Criteria filters with exact null and type semantics
//!
//! Raw JSON text is parsed by `serde_json`; see [`value::Value`] for the
//! document model.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod jsonpath;
pub mod prelude;
pub mod value;

pub use config::{PathConfig, PathConfigProvider};
pub use jsonpath::{
    CompiledPath, ErrorKind, Filter, Fragment, JsonPathError, JsonPathResult, Predicate,
    ReadMode, ReadResult,
};
pub use value::{Object, Value, ValueKind};
