//! Operator semantics for criteria evaluation
//!
//! Every anomaly (absent key, null, mismatched types) resolves to `false`
//! rather than an error, so heterogeneous documents never abort a traversal.

use std::cmp::Ordering;

use super::criteria::Operator;
use crate::value::Value;

/// Apply `operator` to the value found under the criteria key (`None` when absent)
pub(super) fn matches(operator: &Operator, actual: Option<&Value>) -> bool {
    match operator {
        Operator::Is(expected) => equals(actual, expected),
        Operator::Ne(expected) => !equals(actual, expected),
        Operator::Gt(operand) => ordering(actual, operand) == Some(Ordering::Greater),
        Operator::Gte(operand) => matches!(
            ordering(actual, operand),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lt(operand) => ordering(actual, operand) == Some(Ordering::Less),
        Operator::Lte(operand) => matches!(
            ordering(actual, operand),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::In(candidates) => candidates.iter().any(|c| equals(actual, c)),
        Operator::Nin(candidates) => !candidates.iter().any(|c| equals(actual, c)),
        Operator::All(required) => match actual {
            Some(Value::Array(items)) => required.iter().all(|r| items.contains(r)),
            _ => false,
        },
        Operator::Size(expected) => match actual {
            Some(Value::Array(items)) => items.len() == *expected,
            Some(Value::String(text)) => text.chars().count() == *expected,
            _ => false,
        },
        Operator::Exists(expected) => actual.is_some() == *expected,
        Operator::Type(kind) => actual.is_some_and(|value| !value.is_null() && value.kind() == *kind),
        Operator::Regex(pattern) => matches!(actual, Some(Value::String(text)) if pattern.matches(text)),
    }
}

/// Tag-strict equality with an absent value standing in for null
fn equals(actual: Option<&Value>, expected: &Value) -> bool {
    actual.unwrap_or(&Value::Null) == expected
}

/// Numeric ordering; `None` whenever either side is absent, null or not a number
fn ordering(actual: Option<&Value>, operand: &Value) -> Option<Ordering> {
    let actual = actual?;
    match (actual.as_i64(), operand.as_i64()) {
        (Some(left), Some(right)) => Some(left.cmp(&right)),
        _ => actual.as_f64()?.partial_cmp(&operand.as_f64()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_compare_numerically_but_not_equal() {
        assert_eq!(
            ordering(Some(&Value::Int(3)), &Value::Long(3)),
            Some(Ordering::Equal)
        );
        assert!(!equals(Some(&Value::Int(3)), &Value::Long(3)));
    }

    #[test]
    fn mixed_integer_and_double_ordering() {
        assert_eq!(
            ordering(Some(&Value::Int(10)), &Value::Double(10.5)),
            Some(Ordering::Less)
        );
        assert_eq!(ordering(Some(&Value::Double(f64::NAN)), &Value::Int(1)), None);
    }

    #[test]
    fn absent_and_null_do_not_order() {
        assert_eq!(ordering(None, &Value::Int(1)), None);
        assert_eq!(ordering(Some(&Value::Null), &Value::Int(1)), None);
        assert_eq!(ordering(Some(&Value::Int(1)), &Value::Null), None);
        assert_eq!(
            ordering(Some(&Value::String("1".into())), &Value::Int(1)),
            None
        );
    }

    #[test]
    fn absent_equals_null() {
        assert!(equals(None, &Value::Null));
        assert!(!equals(None, &Value::Int(0)));
    }
}
