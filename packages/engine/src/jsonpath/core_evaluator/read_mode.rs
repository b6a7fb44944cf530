//! Read modes and their results

use crate::value::Value;

/// How the caller wants the final working set delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadMode {
    /// Every match, in traversal order
    #[default]
    List,
    /// Exactly one match; zero is `NoSuchPath`
    Single,
}

/// Evaluation outcome borrowing from the document
#[derive(Debug, Clone, PartialEq)]
pub enum ReadResult<'a> {
    List(Vec<&'a Value>),
    Single(&'a Value),
}

impl<'a> ReadResult<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ReadResult::List(values) => values.len(),
            ReadResult::Single(_) => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value of a single read
    #[must_use]
    pub fn as_single(&self) -> Option<&'a Value> {
        match self {
            ReadResult::Single(value) => Some(*value),
            ReadResult::List(_) => None,
        }
    }

    /// Matches as a list; a single read becomes a one-element list
    #[must_use]
    pub fn into_list(self) -> Vec<&'a Value> {
        match self {
            ReadResult::List(values) => values,
            ReadResult::Single(value) => vec![value],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Value> + '_ {
        let values: &[&'a Value] = match self {
            ReadResult::List(values) => values,
            ReadResult::Single(value) => std::slice::from_ref(value),
        };
        values.iter().copied()
    }

    /// Owned copy: the value itself for a single read, an array for a list
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            ReadResult::Single(value) => (*value).clone(),
            ReadResult::List(values) => {
                Value::Array(values.iter().map(|value| (*value).clone()).collect())
            }
        }
    }
}
