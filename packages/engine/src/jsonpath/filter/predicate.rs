//! The node-level predicate capability
//!
//! Compiled paths store bound predicates as `Arc<dyn Predicate>`; criteria-built
//! filters and hand-written predicates are interchangeable at every binding point.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::value::Value;

/// Single-method boolean test over a document node
pub trait Predicate: Send + Sync {
    /// Whether `node` satisfies this predicate
    fn accept(&self, node: &Value) -> bool;

    /// Short human-readable form used in debug output
    fn describe(&self) -> String {
        "custom predicate".to_string()
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    fn accept(&self, node: &Value) -> bool {
        (**self).accept(node)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn accept(&self, node: &Value) -> bool {
        (**self).accept(node)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    fn accept(&self, node: &Value) -> bool {
        (**self).accept(node)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Lock-guarded predicate, for filters that keep growing after they are bound.
/// Writers must finish appending before readers evaluate; the lock only
/// serializes the two.
impl<P: Predicate> Predicate for RwLock<P> {
    fn accept(&self, node: &Value) -> bool {
        match self.read() {
            Ok(guard) => guard.accept(node),
            Err(_) => {
                tracing::warn!(
                    target: "waypath::jsonpath::filter",
                    "predicate lock poisoned, rejecting node"
                );
                false
            }
        }
    }

    fn describe(&self) -> String {
        self.read()
            .map_or_else(|_| "poisoned predicate".to_string(), |guard| guard.describe())
    }
}

/// Closure adapter created by [`predicate_fn`]
#[derive(Clone)]
pub struct FnPredicate<F> {
    test: F,
}

/// Wrap a closure as a [`Predicate`]
///
/// ```
/// use waypath_engine::jsonpath::filter::{Predicate, predicate_fn};
/// use waypath_engine::value::Value;
///
/// let is_one = predicate_fn(|node: &Value| *node == Value::Int(1));
/// assert!(is_one.accept(&Value::Int(1)));
/// ```
pub fn predicate_fn<F>(test: F) -> FnPredicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    FnPredicate { test }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn accept(&self, node: &Value) -> bool {
        (self.test)(node)
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPredicate")
    }
}
