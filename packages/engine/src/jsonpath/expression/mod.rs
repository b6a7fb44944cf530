//! Compiled path representation
//!
//! A [`CompiledPath`] pairs the tokenized fragments with executable steps in
//! which every predicate fragment has been resolved to a concrete predicate.

mod core;

pub use self::core::{CompiledPath, Step, is_path_definite};
