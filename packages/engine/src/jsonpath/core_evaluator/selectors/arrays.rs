//! Array-specific selector operations
//!
//! Index and slice selection with negative indexing. Out-of-range indices and
//! non-array nodes contribute nothing.

use crate::value::Value;

/// Element at `index` of an array node, counting from the end when negative
pub fn apply_index<'a>(node: &'a Value, index: i64, results: &mut Vec<&'a Value>) {
    if let Value::Array(_) = node
        && let Some(element) = node.get_index(index)
    {
        results.push(element);
    }
}

/// Clamped `[start:end)` sub-range of an array node
pub fn apply_slice<'a>(
    node: &'a Value,
    start: Option<i64>,
    end: Option<i64>,
    results: &mut Vec<&'a Value>,
) {
    if let Value::Array(elements) = node {
        let (from, to) = slice_bounds(elements.len(), start, end);
        if from < to {
            results.extend(&elements[from..to]);
        }
    }
}

/// Normalize slice bounds against `len`: negatives count from the end and both
/// bounds clamp to `0..=len`
#[must_use]
pub fn slice_bounds(len: usize, start: Option<i64>, end: Option<i64>) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let normalize = |bound: i64| -> usize {
        let absolute = if bound < 0 { len_i + bound } else { bound };
        usize::try_from(absolute.clamp(0, len_i)).unwrap_or(len)
    };
    let from = start.map_or(0, normalize);
    let to = end.map_or(len, normalize);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_default_to_whole_array() {
        assert_eq!(slice_bounds(5, None, None), (0, 5));
        assert_eq!(slice_bounds(5, Some(1), None), (1, 5));
        assert_eq!(slice_bounds(5, None, Some(2)), (0, 2));
    }

    #[test]
    fn negative_bounds_count_from_end() {
        assert_eq!(slice_bounds(5, Some(-2), None), (3, 5));
        assert_eq!(slice_bounds(5, None, Some(-1)), (0, 4));
    }

    #[test]
    fn bounds_clamp_to_array() {
        assert_eq!(slice_bounds(3, Some(-10), Some(10)), (0, 3));
        assert_eq!(slice_bounds(3, Some(7), None), (3, 3));
        assert_eq!(slice_bounds(0, Some(-1), Some(1)), (0, 0));
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let node = Value::from(vec![1, 2, 3, 4]);
        let mut results = Vec::new();
        apply_slice(&node, Some(3), Some(1), &mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn index_out_of_range_is_pruned() {
        let node = Value::from(vec![1, 2, 3]);
        let mut results = Vec::new();
        apply_index(&node, 3, &mut results);
        apply_index(&node, -4, &mut results);
        assert!(results.is_empty());

        apply_index(&node, -1, &mut results);
        assert_eq!(results, vec![&Value::Int(3)]);
    }

    #[test]
    fn index_ignores_objects() {
        let node = Value::from(serde_json::json!({"0": "zero"}));
        let mut results = Vec::new();
        apply_index(&node, 0, &mut results);
        assert!(results.is_empty());
    }
}
