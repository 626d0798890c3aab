//! Structural inspection of JSON values.
//!
//! Tags render as lowercase names (`"object"`, `"array"`, ...) so validation
//! errors read the same way the JSON input is written.

use serde_json::{Map, Value};
use std::fmt;

/// Structural type tag of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl TypeTag {
    /// Get all tags, in declaration order
    pub fn all() -> &'static [TypeTag] {
        &[
            TypeTag::Null,
            TypeTag::Boolean,
            TypeTag::Number,
            TypeTag::String,
            TypeTag::Array,
            TypeTag::Object,
        ]
    }

    /// Lowercase tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown type tag: {}", s))
    }
}

/// Returns the structural tag of `value`.
pub fn type_tag(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
    }
}

/// Checks whether `value` carries the given structural tag.
///
/// # Examples
///
/// ```
/// use enumkit_common::{is_type, TypeTag};
/// use serde_json::json;
///
/// assert!(is_type(&json!({"a": [1, "A"]}), TypeTag::Object));
/// assert!(!is_type(&json!([1, 2]), TypeTag::Object));
/// ```
pub fn is_type(value: &Value, tag: TypeTag) -> bool {
    type_tag(value) == tag
}

/// Emptiness test shared by JSON values and argument lists
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Checks whether `value` is empty.
///
/// Arrays, strings and objects are empty when they have no elements.
/// Scalars are empty when falsy: `null`, `false` and zero. Slices of
/// arguments are empty when they hold nothing.
///
/// ```
/// use enumkit_common::is_empty;
/// use serde_json::{json, Value};
///
/// assert!(is_empty(&json!({})));
/// let no_args: &[Value] = &[];
/// assert!(is_empty(no_args));
/// ```
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

/// Recursively copies `value`, preserving arrays as arrays and objects as
/// objects (including key order).
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => {
            let mut copy = Map::with_capacity(map.len());
            for (key, item) in map {
                copy.insert(key.clone(), deep_clone(item));
            }
            Value::Object(copy)
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tag_covers_every_variant() {
        assert_eq!(type_tag(&json!(null)), TypeTag::Null);
        assert_eq!(type_tag(&json!(true)), TypeTag::Boolean);
        assert_eq!(type_tag(&json!(1.5)), TypeTag::Number);
        assert_eq!(type_tag(&json!("a")), TypeTag::String);
        assert_eq!(type_tag(&json!([1])), TypeTag::Array);
        assert_eq!(type_tag(&json!({})), TypeTag::Object);
    }

    #[test]
    fn test_is_type_array_is_not_object() {
        assert!(is_type(&json!([1, 2]), TypeTag::Array));
        assert!(!is_type(&json!([1, 2]), TypeTag::Object));
        assert!(!is_type(&json!(null), TypeTag::Object));
    }

    #[test]
    fn test_type_tag_from_str() {
        assert_eq!("object".parse::<TypeTag>(), Ok(TypeTag::Object));
        assert_eq!("ARRAY".parse::<TypeTag>(), Ok(TypeTag::Array));
        assert!("date".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::Boolean.to_string(), "boolean");
    }

    #[test]
    fn test_is_empty_containers() {
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!([0])));
        assert!(!is_empty(&json!({"a": 1})));
        assert!(!is_empty(&json!(" ")));
    }

    #[test]
    fn test_is_empty_scalars_follow_truthiness() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!(false)));
        assert!(is_empty(&json!(0)));
        assert!(is_empty(&json!(0.0)));
        assert!(!is_empty(&json!(true)));
        assert!(!is_empty(&json!(-1)));
    }

    #[test]
    fn test_is_empty_argument_slices() {
        let none: &[Value] = &[];
        assert!(is_empty(none));
        assert!(!is_empty(&[json!(null)][..]));
        assert!(is_empty(""));
        assert!(!is_empty("a"));
    }

    #[test]
    fn test_deep_clone_preserves_shape() {
        let original = json!({"b": [1, {"c": "x"}], "a": null});
        let copy = deep_clone(&original);
        assert_eq!(copy, original);
        assert!(copy["b"].is_array());
        assert!(copy["b"][1].is_object());
    }

    #[test]
    fn test_deep_clone_preserves_key_order() {
        let original = json!({"z": 1, "a": 2, "m": 3});
        let copy = deep_clone(&original);
        let keys: Vec<&String> = copy.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let mut original = json!({"a": [1, "A", {"color": "red"}]});
        let copy = deep_clone(&original);
        original["a"][2]["color"] = json!("blue");
        assert_eq!(copy["a"][2]["color"], json!("red"));
    }
}
