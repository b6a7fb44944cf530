//! Fluent path builder
//!
//! Binds filters to a path one at a time, then compiles or reads.

pub mod core;
pub mod execution;
pub mod filters;

pub use self::core::JsonPathBuilder;
