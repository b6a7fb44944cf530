//! `JSONPath` query engine
//!
//! A path string is tokenized into [`Fragment`]s, compiled together with any
//! supplied predicates into a [`CompiledPath`], and evaluated against a
//! borrowed document.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use waypath_engine::jsonpath::{Filter, Predicate, ReadMode, compile, r#where};
//! use waypath_engine::value::Value;
//!
//! let document = Value::from(serde_json::json!({
//!     "books": [
//!         {"title": "Sayings", "price": 8.95},
//!         {"title": "Moby Dick", "price": 22.99}
//!     ]
//! }));
//!
//! let cheap: Arc<dyn Predicate> = Arc::new(Filter::of(r#where("price").lt(10)));
//! let path = compile("$.books[?].title", [cheap]).expect("valid path");
//! let titles = path.read(&document, ReadMode::List).expect("list read");
//! assert_eq!(titles.into_list(), vec![&Value::from("Sayings")]);
//! ```

pub mod ast;
pub mod compiler;
pub mod core_evaluator;
pub mod error;
pub mod expression;
pub mod filter;
pub mod filter_parser;
pub mod tokenizer;

pub use self::{
    ast::Fragment,
    compiler::{PathCompiler, compile},
    core_evaluator::{PathEvaluator, ReadMode, ReadResult, evaluate},
    error::{ErrorKind, JsonPathError, JsonPathResult},
    expression::{CompiledPath, Step, is_path_definite},
    filter::{
        Criteria, CriteriaBuilder, CriteriaChain, Filter, FnPredicate, Operator, Pattern,
        PatternFlags, Predicate, predicate_fn, r#where,
    },
    filter_parser::parse_inline_predicate,
    tokenizer::{tokenize, tokenize_with_config},
};
