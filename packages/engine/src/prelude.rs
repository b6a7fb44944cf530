//! Waypath engine prelude
//!
//! The types most callers need to compile paths, build filters and read
//! documents.

pub use crate::config::{PathConfig, PathConfigProvider};
pub use crate::jsonpath::{
    CompiledPath, Criteria, ErrorKind, Filter, Fragment, JsonPathError, JsonPathResult, Pattern,
    PatternFlags, Predicate, ReadMode, ReadResult, compile, predicate_fn, r#where, tokenize,
};
pub use crate::value::{Value, ValueKind};
