//! Document value model
//!
//! Tagged tree of objects, arrays and scalars that compiled paths walk. Integer
//! widths keep distinct tags (`Int`, `Long`) so type criteria never widen one
//! numeric kind into another.

mod conversions;
mod kind;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use kind::ValueKind;

/// Object storage; iteration follows insertion order, lookup does not depend on it
pub type Object = IndexMap<String, Value>;

/// A node of an in-memory JSON-like document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null
    #[default]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// 32-bit integer scalar
    Int(i32),
    /// 64-bit integer scalar
    Long(i64),
    /// Floating-point scalar
    Double(f64),
    /// String scalar
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// String-keyed mapping
    Object(Object),
}

impl Value {
    /// Variant tag of this node
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric view of `Int`, `Long` and `Double` nodes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Integer view of `Int` and `Long` nodes
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Value stored under `key`, when this node is an object holding it
    ///
    /// `Some(&Value::Null)` means the key is present with an explicit null,
    /// `None` means the key is absent or this node is not an object.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains_key(key))
    }

    /// Array element at `index`; negative indices count from the end
    #[must_use]
    pub fn get_index(&self, index: i64) -> Option<&Value> {
        let items = self.as_array()?;
        let len = i64::try_from(items.len()).ok()?;
        let position = if index < 0 { len + index } else { index };
        if position < 0 {
            return None;
        }
        items.get(usize::try_from(position).ok()?)
    }

    /// Element count of arrays and objects, character count of strings
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(object) => Some(object.len()),
            Value::String(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    /// Immediate children in traversal order: array order, or object insertion order
    pub fn children(&self) -> impl Iterator<Item = &Value> + '_ {
        let (items, values) = match self {
            Value::Array(items) => (Some(items.iter()), None),
            Value::Object(object) => (None, Some(object.values())),
            _ => (None, None),
        };
        items.into_iter().flatten().chain(values.into_iter().flatten())
    }
}
