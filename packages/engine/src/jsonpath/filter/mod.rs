//! Criteria and filter predicates
//!
//! A [`Criteria`] is one named comparison against an object node; a [`Filter`]
//! is an ordered conjunction of criteria. Both, and any user type, implement the
//! single-method [`Predicate`] capability that compiled paths invoke.

mod builder;
mod comparisons;
mod core;
mod criteria;
mod pattern;
mod predicate;

pub use builder::{CriteriaBuilder, CriteriaChain, r#where};
pub use self::core::Filter;
pub use criteria::{Criteria, Operator};
pub use pattern::{Pattern, PatternFlags};
pub use predicate::{FnPredicate, Predicate, predicate_fn};
