//! Waypath Public API
//!
//! Query in-memory JSON documents with `JSONPath` expressions. Predicate
//! placeholders (`[?]`) bind, left to right, to filters built from criteria or to
//! any custom [`Predicate`].
//!
//! ```rust
//! use waypath::{Filter, JsonPath, Value, r#where};
//!
//! let document = Value::from(serde_json::json!({
//!     "store": {"book": [
//!         {"category": "reference", "price": 8.95},
//!         {"category": "fiction", "price": 12.99}
//!     ]}
//! }));
//!
//! let fiction = JsonPath::builder("$.store.book[?].price")
//!     .filter(Filter::of(r#where("category").is("fiction")))
//!     .read_list(&document)
//!     .expect("valid path");
//! assert_eq!(fiction, vec![&Value::Double(12.99)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

use std::sync::Arc;

pub use builder::JsonPathBuilder;

pub use waypath_engine::config::{PathConfig, PathConfigProvider};
pub use waypath_engine::jsonpath::{
    CompiledPath, Criteria, CriteriaBuilder, CriteriaChain, ErrorKind, Filter, Fragment,
    JsonPathError, JsonPathResult, Operator, Pattern, PatternFlags, Predicate, ReadMode,
    ReadResult, predicate_fn, r#where, tokenize,
};
pub use waypath_engine::value::{Object, Value, ValueKind};

/// Main entry point providing static compile and read methods
pub struct JsonPath;

impl JsonPath {
    /// Compile a path that has no `[?]` placeholders
    ///
    /// # Errors
    ///
    /// `InvalidPathFormat` for grammar violations, `FilterBindingMismatch` when
    /// the path contains placeholders.
    pub fn compile(path: &str) -> JsonPathResult<CompiledPath> {
        waypath_engine::jsonpath::compile(path, std::iter::empty())
    }

    /// Compile a path binding placeholders to `filters` in order
    ///
    /// # Errors
    ///
    /// `InvalidPathFormat` or `FilterBindingMismatch`.
    pub fn compile_with<I>(path: &str, filters: I) -> JsonPathResult<CompiledPath>
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        waypath_engine::jsonpath::compile(path, filters)
    }

    /// Start a fluent builder for `path`
    pub fn builder(path: impl Into<String>) -> JsonPathBuilder {
        JsonPathBuilder::new(path)
    }

    /// Compile and read `document`: a single value for definite paths, a list
    /// otherwise
    ///
    /// # Errors
    ///
    /// Compile-time errors, and `NoSuchPath` when a definite path matches nothing.
    pub fn read<'a, I>(document: &'a Value, path: &str, filters: I) -> JsonPathResult<ReadResult<'a>>
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        let compiled = Self::compile_with(path, filters)?;
        compiled.read(document, read_mode_for(&compiled))
    }

    /// [`JsonPath::read`] over `serde_json` values, returning an owned result
    /// (an array for list reads)
    ///
    /// # Errors
    ///
    /// As [`JsonPath::read`].
    pub fn read_value<I>(
        document: &serde_json::Value,
        path: &str,
        filters: I,
    ) -> JsonPathResult<serde_json::Value>
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        let document = Value::from(document.clone());
        let result = Self::read(&document, path, filters)?;
        Ok(serde_json::Value::from(&result.to_value()))
    }
}

/// Read mode implied by a compiled path's definiteness
#[must_use]
pub fn read_mode_for(path: &CompiledPath) -> ReadMode {
    let mode = if path.is_definite() {
        ReadMode::Single
    } else {
        ReadMode::List
    };
    log::debug!("reading '{}' in {:?} mode", path, mode);
    mode
}

/// Start a fluent builder for `path`
///
/// Shorthand for `JsonPath::builder(path)`
pub fn path(path: impl Into<String>) -> JsonPathBuilder {
    JsonPathBuilder::new(path)
}
