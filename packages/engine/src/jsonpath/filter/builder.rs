//! Fluent criteria construction
//!
//! `r#where("key")` starts a builder; each operator method finishes one
//! [`Criteria`] and returns the accumulated [`CriteriaChain`], whose `and(key)`
//! starts the next criteria in the same chain.
//!
//! ```
//! use waypath_engine::jsonpath::filter::{Filter, r#where};
//! use waypath_engine::value::Value;
//!
//! let filter = Filter::of(r#where("string").is("foo").and("int").lt(11));
//! let node: Value = [("string", Value::from("foo")), ("int", Value::Int(10))]
//!     .into_iter()
//!     .collect();
//! assert!(filter.accept(&node));
//! ```

use super::criteria::{Criteria, Operator};
use super::pattern::Pattern;
use super::predicate::Predicate;
use crate::value::{Value, ValueKind};

/// Start a criteria on `key`
pub fn r#where(key: impl Into<String>) -> CriteriaBuilder {
    CriteriaBuilder::new(key)
}

/// Pending criteria on one key, carrying the criteria finished before it
#[derive(Debug, Clone)]
#[must_use = "a criteria builder does nothing until an operator is applied"]
pub struct CriteriaBuilder {
    chain: Vec<Criteria>,
    key: String,
}

impl CriteriaBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            chain: Vec::new(),
            key: key.into(),
        }
    }

    fn finish(mut self, operator: Operator) -> CriteriaChain {
        self.chain.push(Criteria::new(self.key, operator));
        CriteriaChain {
            criteria: self.chain,
        }
    }

    #[must_use]
    pub fn is(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Is(value.into()))
    }

    #[must_use]
    pub fn ne(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Ne(value.into()))
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Gt(value.into()))
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Gte(value.into()))
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Lt(value.into()))
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> CriteriaChain {
        self.finish(Operator::Lte(value.into()))
    }

    #[must_use]
    pub fn r#in<I, V>(self, values: I) -> CriteriaChain
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.finish(Operator::In(collect(values)))
    }

    #[must_use]
    pub fn nin<I, V>(self, values: I) -> CriteriaChain
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.finish(Operator::Nin(collect(values)))
    }

    #[must_use]
    pub fn all<I, V>(self, values: I) -> CriteriaChain
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.finish(Operator::All(collect(values)))
    }

    #[must_use]
    pub fn size(self, size: usize) -> CriteriaChain {
        self.finish(Operator::Size(size))
    }

    #[must_use]
    pub fn exists(self, present: bool) -> CriteriaChain {
        self.finish(Operator::Exists(present))
    }

    #[must_use]
    pub fn r#type(self, kind: ValueKind) -> CriteriaChain {
        self.finish(Operator::Type(kind))
    }

    #[must_use]
    pub fn regex(self, pattern: Pattern) -> CriteriaChain {
        self.finish(Operator::Regex(pattern))
    }
}

fn collect<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values.into_iter().map(Into::into).collect()
}

/// Ordered criteria produced by a fluent chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaChain {
    criteria: Vec<Criteria>,
}

impl CriteriaChain {
    /// Start another criteria on `key` in this chain
    pub fn and(self, key: impl Into<String>) -> CriteriaBuilder {
        CriteriaBuilder {
            chain: self.criteria,
            key: key.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn criteria(&self) -> &[Criteria] {
        &self.criteria
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl From<Criteria> for CriteriaChain {
    fn from(criteria: Criteria) -> Self {
        Self {
            criteria: vec![criteria],
        }
    }
}

impl IntoIterator for CriteriaChain {
    type Item = Criteria;
    type IntoIter = std::vec::IntoIter<Criteria>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.into_iter()
    }
}

impl Predicate for CriteriaChain {
    fn accept(&self, node: &Value) -> bool {
        self.criteria.iter().all(|criteria| criteria.accept(node))
    }
}
