//! Wildcard selector

use crate::value::Value;

/// Immediate children in insertion or array order; scalars contribute nothing
pub fn apply_wildcard<'a>(node: &'a Value, results: &mut Vec<&'a Value>) {
    results.extend(node.children());
}
