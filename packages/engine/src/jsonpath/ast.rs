//! `JSONPath` fragment definitions
//!
//! A tokenized path is an ordered sequence of [`Fragment`]s that always begins
//! with [`Fragment::Root`]. Equivalent surface forms (`.x`, `['x']`, `.['x']`)
//! normalize to the same fragment.

use std::fmt;

/// One normalized path operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Root marker (`$`), implied when the path omits it
    Root,

    /// Property name (`.name` or `['name']`)
    Property(String),

    /// Wildcard (`*` or `[*]`)
    Wildcard,

    /// Recursive descent (`..`)
    RecursiveDescent,

    /// Array index (`[0]`, `[-1]`); negative indices count from the end
    Index(i64),

    /// Array index union (`[0,2,-1]`)
    Indices(Vec<i64>),

    /// Array slice (`[1:3]`, `[-1:]`, `[:2]`)
    Slice {
        /// First included index (None means from the beginning)
        start: Option<i64>,
        /// First excluded index (None means to the end)
        end: Option<i64>,
    },

    /// Predicate placeholder (`[?]`) bound to a supplied filter at compile time
    Placeholder,

    /// Inline predicate expression (`[?(@.price < 10)]`), text without the `?( )` wrapper
    Expression(String),
}

impl Fragment {
    /// Shorthand for [`Fragment::Property`]
    #[inline]
    pub fn property(name: impl Into<String>) -> Self {
        Fragment::Property(name.into())
    }

    /// Whether this fragment selects at most one node per input node
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        matches!(
            self,
            Fragment::Root | Fragment::Property(_) | Fragment::Index(_)
        )
    }

    /// Whether this fragment is a filter predicate (placeholder or inline)
    #[inline]
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        matches!(self, Fragment::Placeholder | Fragment::Expression(_))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Root => f.write_str("$"),
            Fragment::Property(name) => f.write_str(name),
            Fragment::Wildcard => f.write_str("*"),
            Fragment::RecursiveDescent => f.write_str(".."),
            Fragment::Index(index) => write!(f, "[{index}]"),
            Fragment::Indices(indices) => {
                f.write_str("[")?;
                for (position, index) in indices.iter().enumerate() {
                    if position > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{index}")?;
                }
                f.write_str("]")
            }
            Fragment::Slice { start, end } => {
                f.write_str("[")?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                f.write_str(":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                f.write_str("]")
            }
            Fragment::Placeholder => f.write_str("[?]"),
            Fragment::Expression(expression) => write!(f, "[?({expression})]"),
        }
    }
}
