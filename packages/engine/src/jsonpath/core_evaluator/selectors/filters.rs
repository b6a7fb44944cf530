//! Predicate selector

use crate::jsonpath::filter::Predicate;
use crate::value::Value;

/// Keep the accepted elements of an array node when `expand_arrays` is set;
/// otherwise keep the node itself if accepted
pub fn apply_predicate<'a>(
    node: &'a Value,
    predicate: &dyn Predicate,
    expand_arrays: bool,
    results: &mut Vec<&'a Value>,
) {
    match node {
        Value::Array(elements) if expand_arrays => {
            results.extend(elements.iter().filter(|element| predicate.accept(element)));
        }
        _ => {
            if predicate.accept(node) {
                results.push(node);
            }
        }
    }
}
