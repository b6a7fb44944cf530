//! Recursive descent (`..`)
//!
//! Documents are acyclic trees of owned values, so no cycle guard is needed.

use crate::value::Value;

/// Push `node` followed by every descendant, pre-order
pub fn collect_descendants<'a>(node: &'a Value, results: &mut Vec<&'a Value>) {
    results.push(node);
    for child in node.children() {
        collect_descendants(child, results);
    }
}
