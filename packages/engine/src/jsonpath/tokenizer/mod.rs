//! JSONPath path tokenizer
//!
//! Lexes a raw path string into an ordered [`Fragment`](super::ast::Fragment)
//! sequence. Handles the leading-form normalization, dot and bracket splitting,
//! quoting and whitespace trimming.

mod brackets;
mod core;
pub(crate) mod strings;

pub use self::core::{PathTokenizer, tokenize, tokenize_with_config};
