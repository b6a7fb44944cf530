//! Per-step selectors
//!
//! Each selector maps one node of the working set onto zero or more borrowed
//! nodes appended to `results`. Misses prune silently.

pub mod arrays;
pub mod core;
pub mod filters;
pub mod wildcards;

use crate::jsonpath::expression::Step;
use crate::value::Value;

use super::recursive_descent::collect_descendants;

/// Apply one step to one node
pub fn apply_step<'a>(step: &Step, node: &'a Value, results: &mut Vec<&'a Value>) {
    match step {
        Step::Root => results.push(node),
        Step::Property {
            name,
            project_arrays,
        } => self::core::apply_property(node, name, *project_arrays, results),
        Step::Wildcard => wildcards::apply_wildcard(node, results),
        Step::RecursiveDescent => collect_descendants(node, results),
        Step::Index(index) => arrays::apply_index(node, *index, results),
        Step::Indices(indices) => {
            for index in indices {
                arrays::apply_index(node, *index, results);
            }
        }
        Step::Slice { start, end } => arrays::apply_slice(node, *start, *end, results),
        Step::Predicate {
            predicate,
            expand_arrays,
        } => filters::apply_predicate(node, predicate.as_ref(), *expand_arrays, results),
    }
}
