//! Property selector

use crate::value::Value;

/// Project `name` from an object, or from each object element of an array
/// when `project_arrays` is set
pub fn apply_property<'a>(
    node: &'a Value,
    name: &str,
    project_arrays: bool,
    results: &mut Vec<&'a Value>,
) {
    match node {
        Value::Object(object) => {
            if let Some(value) = object.get(name) {
                results.push(value);
            }
        }
        Value::Array(elements) if project_arrays => {
            results.extend(elements.iter().filter_map(|element| match element {
                Value::Object(object) => object.get(name),
                _ => None,
            }));
        }
        _ => {}
    }
}
