//! Helpers for loosely typed JSON-like data.
//!
//! These walk `serde_json::Value` trees the way script code walks plain objects
//! and arrays: missing keys yield `None` instead of errors.

use serde_json::{Map, Value};

/// The position of an element handed to a `for_each` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    /// The key as object-property text; indices become decimal strings.
    pub fn to_property(&self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => (*name).to_string(),
        }
    }
}

/// Call `f` for every element of an array or entry of an object.
///
/// `Null` produces no calls and any other scalar is visited as a one-element array.
pub fn for_each<'a, F>(value: &'a Value, mut f: F)
where
    F: FnMut(&'a Value, Key<'a>),
{
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                f(item, Key::Index(i));
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                f(item, Key::Name(name));
            }
        }
        scalar => f(scalar, Key::Index(0)),
    }
}

/// Deep-merge values into a new object; later values win.
///
/// Nested objects present on both sides are merged recursively; anything else
/// is replaced. Array elements land under their index as a property name.
pub fn merge(values: &[&Value]) -> Value {
    let mut result = Map::new();
    for value in values {
        for_each(value, |item, key| {
            let property = key.to_property();
            let merged = match (result.get(&property), item) {
                (Some(existing @ Value::Object(_)), Value::Object(_)) => merge(&[existing, item]),
                _ => item.clone(),
            };
            result.insert(property, merged);
        });
    }
    Value::Object(result)
}

/// The property names of an object, or `None` for anything else.
pub fn keys(value: &Value) -> Option<Vec<String>> {
    value.as_object().map(|map| map.keys().cloned().collect())
}

/// The property values of an object, or `None` for anything else.
pub fn values(value: &Value) -> Option<Vec<Value>> {
    value.as_object().map(|map| map.values().cloned().collect())
}

/// Follow a chain of object keys and array indices.
///
/// ```
/// let data = serde_json::json!({"a": {"b": [10, 20]}});
/// assert_eq!(fmtkit::object::path(&["a", "b", "1"], &data), Some(&serde_json::json!(20)));
/// assert_eq!(fmtkit::object::path(&["a", "c"], &data), None);
/// ```
pub fn path<'a, S: AsRef<str>>(segments: &[S], value: &'a Value) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(value, |current, segment| step(current, segment.as_ref()))
}

/// Look up a single key or index.
pub fn prop<'a>(key: &str, value: &'a Value) -> Option<&'a Value> {
    step(value, key)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Collect `prop(key, item)` for every array element or object value.
///
/// Missing and `null` results are dropped.
pub fn pluck(key: &str, value: &Value) -> Vec<Value> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| prop(key, item))
        .filter(|found| !found.is_null())
        .cloned()
        .collect()
}

/// A shallow copy of an object with `key` set to `new_value`.
///
/// Anything other than an object starts from an empty object.
pub fn assign(key: &str, new_value: Value, value: &Value) -> Value {
    let mut map = value.as_object().cloned().unwrap_or_default();
    map.insert(key.to_string(), new_value);
    Value::Object(map)
}

/// Collect every object nested inside arrays and object values.
///
/// Arrays are flattened; each object is emitted before the objects found in its
/// own values. Scalars are dropped.
pub fn flatten_objects(value: &Value) -> Vec<Value> {
    let mut result = Vec::new();
    collect_objects(value, &mut result);
    result
}

fn collect_objects(value: &Value, out: &mut Vec<Value>) {
    for_each(value, |item, _| match item {
        Value::Array(_) => collect_objects(item, out),
        Value::Object(map) => {
            out.push(item.clone());
            for nested in map.values() {
                collect_objects(nested, out);
            }
        }
        _ => {}
    });
}

/// Elements of the longer slice that the shorter one lacks.
///
/// Returns nothing when either slice is empty; on equal lengths the second
/// slice is treated as the longer one.
pub fn difference<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    if first.is_empty() || second.is_empty() {
        return Vec::new();
    }
    let (longer, shorter) = if first.len() > second.len() {
        (first, second)
    } else {
        (second, first)
    };
    longer
        .iter()
        .filter(|item| !shorter.contains(item))
        .cloned()
        .collect()
}
