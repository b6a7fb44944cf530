//! Single named comparison tests
//!
//! A criteria reads the value stored under its key in an object node and applies
//! one operator. An absent key is distinct from an explicit null.

use std::fmt;

use super::comparisons;
use super::pattern::Pattern;
use super::predicate::Predicate;
use crate::value::{Value, ValueKind};

/// Comparison operator together with its operand
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// Equal to the operand; absent counts as null
    Is(Value),
    /// Not equal to the operand; absent counts as null
    Ne(Value),
    /// Numerically greater than the operand
    Gt(Value),
    /// Numerically greater than or equal to the operand
    Gte(Value),
    /// Numerically less than the operand
    Lt(Value),
    /// Numerically less than or equal to the operand
    Lte(Value),
    /// Equal to at least one listed value
    In(Vec<Value>),
    /// Equal to none of the listed values
    Nin(Vec<Value>),
    /// An array containing every listed value
    All(Vec<Value>),
    /// An array or string of exactly this many elements or characters
    Size(usize),
    /// Key presence equals the flag, whatever the stored value
    Exists(bool),
    /// Non-null with exactly this variant tag
    Type(ValueKind),
    /// A string fully matched by the pattern
    Regex(Pattern),
}

impl Operator {
    /// Lower-case operator name as written in the fluent builder
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Is(_) => "is",
            Operator::Ne(_) => "ne",
            Operator::Gt(_) => "gt",
            Operator::Gte(_) => "gte",
            Operator::Lt(_) => "lt",
            Operator::Lte(_) => "lte",
            Operator::In(_) => "in",
            Operator::Nin(_) => "nin",
            Operator::All(_) => "all",
            Operator::Size(_) => "size",
            Operator::Exists(_) => "exists",
            Operator::Type(_) => "type",
            Operator::Regex(_) => "regex",
        }
    }
}

/// One operator test against the value under `key`
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    key: String,
    operator: Operator,
}

impl Criteria {
    #[must_use]
    pub fn new(key: impl Into<String>, operator: Operator) -> Self {
        Self {
            key: key.into(),
            operator,
        }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Evaluate against `node`; nodes that are not objects never match
    #[must_use]
    pub fn accept(&self, node: &Value) -> bool {
        match node.as_object() {
            Some(object) => comparisons::matches(&self.operator, object.get(&self.key)),
            None => false,
        }
    }
}

impl Predicate for Criteria {
    fn accept(&self, node: &Value) -> bool {
        Criteria::accept(self, node)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.operator.name();
        match &self.operator {
            Operator::Is(operand)
            | Operator::Ne(operand)
            | Operator::Gt(operand)
            | Operator::Gte(operand)
            | Operator::Lt(operand)
            | Operator::Lte(operand) => write!(f, "{} {name} {}", self.key, render(operand)),
            Operator::In(list) | Operator::Nin(list) | Operator::All(list) => {
                let rendered: Vec<String> = list.iter().map(render).collect();
                write!(f, "{} {name} [{}]", self.key, rendered.join(", "))
            }
            Operator::Size(size) => write!(f, "{} {name} {size}", self.key),
            Operator::Exists(flag) => write!(f, "{} {name} {flag}", self.key),
            Operator::Type(kind) => write!(f, "{} {name} {kind}", self.key),
            Operator::Regex(pattern) => write!(f, "{} {name} {pattern}", self.key),
        }
    }
}

fn render(value: &Value) -> String {
    serde_json::Value::from(value).to_string()
}
