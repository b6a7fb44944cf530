//! `JSONPath` evaluation engine
//!
//! Applies compiled steps to a working set of borrowed nodes. The document is
//! only ever read; results borrow from it.

use crate::config::{PathConfig, PathConfigProvider};
use crate::jsonpath::{
    error::{JsonPathResult, internal_error, no_such_path_error},
    expression::CompiledPath,
};
use crate::value::Value;

use super::read_mode::{ReadMode, ReadResult};
use super::selectors::apply_step;

/// Evaluator for one compiled path
pub struct PathEvaluator<'p> {
    path: &'p CompiledPath,
    trace: bool,
}

impl<'p> PathEvaluator<'p> {
    #[must_use]
    pub fn new(path: &'p CompiledPath) -> Self {
        Self::with_config(path, &PathConfig::default())
    }

    #[must_use]
    pub fn with_config<C: PathConfigProvider + ?Sized>(path: &'p CompiledPath, config: &C) -> Self {
        Self {
            path,
            trace: config.trace_evaluation(),
        }
    }

    /// The path being evaluated
    #[must_use]
    pub fn path(&self) -> &'p CompiledPath {
        self.path
    }

    /// Final working set for `document`, in traversal order, duplicates kept
    #[must_use]
    pub fn select<'a>(&self, document: &'a Value) -> Vec<&'a Value> {
        let mut working: Vec<&'a Value> = vec![document];

        for (position, step) in self.path.steps().iter().enumerate() {
            let mut next = Vec::with_capacity(working.len());
            for node in &working {
                apply_step(step, node, &mut next);
            }
            working = next;

            if self.trace {
                tracing::trace!(
                    target: "waypath::jsonpath::evaluator",
                    path = %self.path,
                    position,
                    step = ?step,
                    nodes = working.len(),
                    "applied step"
                );
            }
            if working.is_empty() {
                break;
            }
        }

        working
    }

    /// Evaluate under `mode`
    ///
    /// # Errors
    ///
    /// Under [`ReadMode::Single`], returns `NoSuchPath` when nothing matched and
    /// `Internal` when more than one value matched.
    pub fn evaluate<'a>(&self, document: &'a Value, mode: ReadMode) -> JsonPathResult<ReadResult<'a>> {
        let matches = self.select(document);
        match mode {
            ReadMode::List => Ok(ReadResult::List(matches)),
            ReadMode::Single => match matches.as_slice() {
                [] => Err(no_such_path_error(self.path.original())),
                [value] => Ok(ReadResult::Single(*value)),
                many => {
                    tracing::error!(
                        target: "waypath::jsonpath::evaluator",
                        path = %self.path,
                        definite = self.path.is_definite(),
                        matches = many.len(),
                        "single read matched more than one value"
                    );
                    Err(internal_error(
                        self.path.original(),
                        format!("single read matched {} values", many.len()),
                    ))
                }
            },
        }
    }
}

/// Evaluate `path` against `document` with default configuration
///
/// # Errors
///
/// See [`PathEvaluator::evaluate`].
pub fn evaluate<'a>(
    document: &'a Value,
    path: &CompiledPath,
    mode: ReadMode,
) -> JsonPathResult<ReadResult<'a>> {
    PathEvaluator::new(path).evaluate(document, mode)
}

impl CompiledPath {
    /// Evaluate this path against `document`
    ///
    /// # Errors
    ///
    /// See [`PathEvaluator::evaluate`].
    pub fn read<'a>(&self, document: &'a Value, mode: ReadMode) -> JsonPathResult<ReadResult<'a>> {
        PathEvaluator::new(self).evaluate(document, mode)
    }

    /// Every match, in traversal order
    #[must_use]
    pub fn read_list<'a>(&self, document: &'a Value) -> Vec<&'a Value> {
        PathEvaluator::new(self).select(document)
    }

    /// The single match
    ///
    /// # Errors
    ///
    /// `NoSuchPath` when nothing matched, `Internal` when several did.
    pub fn read_single<'a>(&self, document: &'a Value) -> JsonPathResult<&'a Value> {
        match PathEvaluator::new(self).evaluate(document, ReadMode::Single)? {
            ReadResult::Single(value) => Ok(value),
            ReadResult::List(_) => Err(internal_error(self.original(), "single read produced a list")),
        }
    }
}
