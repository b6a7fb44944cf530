//! Core `JSONPath` evaluator module
//!
//! Walks a document guided by a compiled path. The working set starts as the
//! document root and every step maps it to a new set of borrowed nodes.

pub mod engine;
pub mod read_mode;
pub mod recursive_descent;
pub mod selectors;

pub use engine::{PathEvaluator, evaluate};
pub use read_mode::{ReadMode, ReadResult};
