//! Inline predicate expression parser
//!
//! Compiles the text of a `[?(...)]` fragment into a [`Filter`](super::filter::Filter)
//! so inline predicates and bound filters evaluate the same way.

mod core;
mod literals;

pub use self::core::{InlinePredicateParser, parse_inline_predicate};
