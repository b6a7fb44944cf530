//! Core `CompiledPath` structure and accessors

use std::fmt;
use std::sync::Arc;

use crate::jsonpath::{ast::Fragment, filter::Predicate};

/// One executable operation of a compiled path
#[derive(Clone)]
pub enum Step {
    /// Start from the document root
    Root,

    /// Project a property
    Property {
        name: String,
        /// Whether arrays of objects project the property from each element.
        /// Off directly after recursive descent, which has already expanded arrays.
        project_arrays: bool,
    },

    /// Immediate children of every node
    Wildcard,

    /// Every node together with all of its descendants, pre-order
    RecursiveDescent,

    /// Element at one index of every array
    Index(i64),

    /// Elements at several indices of every array, in listed order
    Indices(Vec<i64>),

    /// Clamped sub-range of every array
    Slice { start: Option<i64>, end: Option<i64> },

    /// Keep nodes the predicate accepts
    Predicate {
        predicate: Arc<dyn Predicate>,
        /// Whether array nodes are filtered element-wise rather than tested whole.
        /// Off directly after recursive descent.
        expand_arrays: bool,
    },
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Root => f.write_str("Root"),
            Step::Property {
                name,
                project_arrays,
            } => f
                .debug_struct("Property")
                .field("name", name)
                .field("project_arrays", project_arrays)
                .finish(),
            Step::Wildcard => f.write_str("Wildcard"),
            Step::RecursiveDescent => f.write_str("RecursiveDescent"),
            Step::Index(index) => f.debug_tuple("Index").field(index).finish(),
            Step::Indices(indices) => f.debug_tuple("Indices").field(indices).finish(),
            Step::Slice { start, end } => f
                .debug_struct("Slice")
                .field("start", start)
                .field("end", end)
                .finish(),
            Step::Predicate {
                predicate,
                expand_arrays,
            } => f
                .debug_struct("Predicate")
                .field("predicate", &predicate.describe())
                .field("expand_arrays", expand_arrays)
                .finish(),
        }
    }
}

/// Path compiled once and evaluated against any number of documents
#[derive(Clone)]
pub struct CompiledPath {
    original: String,
    fragments: Vec<Fragment>,
    steps: Vec<Step>,
    definite: bool,
}

impl CompiledPath {
    pub(crate) fn new(original: String, fragments: Vec<Fragment>, steps: Vec<Step>) -> Self {
        let definite = is_path_definite(&fragments);
        Self {
            original,
            fragments,
            steps,
            definite,
        }
    }

    /// Path string this was compiled from
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Tokenized fragments, root first
    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Executable steps, one per fragment
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// True when no fragment is a wildcard, recursive descent, slice, index
    /// union or predicate
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        self.definite
    }

    /// Number of predicate steps, bound placeholders and inline expressions alike
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_predicate()).count()
    }
}

/// Definiteness of a fragment sequence
#[must_use]
pub fn is_path_definite(fragments: &[Fragment]) -> bool {
    fragments.iter().all(Fragment::is_definite)
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl fmt::Debug for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPath")
            .field("original", &self.original)
            .field("steps", &self.steps)
            .field("definite", &self.definite)
            .finish()
    }
}
