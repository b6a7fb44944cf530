//! Filter: ordered conjunction of criteria
//!
//! A filter accepts a node when every criteria accepts it, checking in order
//! and stopping at the first rejection. Filters only grow by explicit append.

use std::fmt;

use super::builder::CriteriaChain;
use super::criteria::Criteria;
use super::predicate::Predicate;
use crate::value::Value;

/// Conjunction of [`Criteria`], reusable across documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    criteria: Vec<Criteria>,
}

impl Filter {
    /// Empty filter; accepts every node until criteria are added
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter over the criteria of a fluent chain (or a single criteria)
    pub fn of(criteria: impl Into<CriteriaChain>) -> Self {
        Self {
            criteria: criteria.into().into_iter().collect(),
        }
    }

    /// Append criteria; later `accept` calls include them
    pub fn add_criteria(&mut self, criteria: impl Into<CriteriaChain>) -> &mut Self {
        self.criteria.extend(criteria.into());
        self
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

    /// Whether every criteria accepts `node`
    #[must_use]
    pub fn accept(&self, node: &Value) -> bool {
        let rejected_by = self.criteria.iter().position(|criteria| !criteria.accept(node));
        tracing::trace!(
            target: "waypath::jsonpath::filter",
            criteria = self.criteria.len(),
            rejected_by = ?rejected_by,
            "filter evaluated"
        );
        rejected_by.is_none()
    }
}

impl Predicate for Filter {
    fn accept(&self, node: &Value) -> bool {
        Filter::accept(self, node)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<CriteriaChain> for Filter {
    fn from(chain: CriteriaChain) -> Self {
        Self::of(chain)
    }
}

impl From<Criteria> for Filter {
    fn from(criteria: Criteria) -> Self {
        Self::of(criteria)
    }
}

impl FromIterator<Criteria> for Filter {
    fn from_iter<I: IntoIterator<Item = Criteria>>(criteria: I) -> Self {
        Self {
            criteria: criteria.into_iter().collect(),
        }
    }
}

impl Extend<Criteria> for Filter {
    fn extend<I: IntoIterator<Item = Criteria>>(&mut self, criteria: I) {
        self.criteria.extend(criteria);
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.criteria.is_empty() {
            return f.write_str("<accept all>");
        }
        for (position, criteria) in self.criteria.iter().enumerate() {
            if position > 0 {
                f.write_str(" && ")?;
            }
            write!(f, "{criteria}")?;
        }
        Ok(())
    }
}
