//! Enum definitions: the ordered `key => [value, label, extra?]` input
//!
//! A definition is either built in code with [`EnumDefinition::entry`] or parsed
//! from a JSON object with [`EnumDefinition::from_value`]. Parsing always works on
//! a deep copy, so the caller's value can change afterwards without affecting
//! anything built from it.

use enumkit_common::{deep_clone, is_type, type_tag, TypeTag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EnumError;

/// One row of a definition
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    pub key: String,
    pub value: Value,
    pub label: Value,
    /// Optional metadata attached to the entry (colors, icons, ...)
    pub extra: Option<Value>,
}

impl EnumEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, label: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: label.into(),
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<Value>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// Build an entry from a `[value, label, extra?]` tuple.
    ///
    /// Missing value or label positions become `null`, a missing extra stays
    /// `None`, and anything after the third position is ignored.
    fn from_tuple(key: String, items: Vec<Value>) -> Self {
        let mut items = items.into_iter();
        Self {
            key,
            value: items.next().unwrap_or(Value::Null),
            label: items.next().unwrap_or(Value::Null),
            extra: items.next(),
        }
    }

    /// The `[value, label, extra?]` tuple form of this entry
    pub fn to_tuple(&self) -> Value {
        let mut tuple = vec![self.value.clone(), self.label.clone()];
        if let Some(extra) = &self.extra {
            tuple.push(extra.clone());
        }
        Value::Array(tuple)
    }
}

/// Ordered set of enum entries, keyed by unique string keys
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct EnumDefinition {
    entries: Vec<EnumEntry>,
}

impl EnumDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `key => [value, label]` row.
    pub fn entry(
        self,
        key: impl Into<String>,
        value: impl Into<Value>,
        label: impl Into<Value>,
    ) -> Self {
        self.with(EnumEntry::new(key, value, label))
    }

    /// Add a `key => [value, label, extra]` row.
    pub fn entry_with_extra(
        self,
        key: impl Into<String>,
        value: impl Into<Value>,
        label: impl Into<Value>,
        extra: impl Into<Value>,
    ) -> Self {
        self.with(EnumEntry::new(key, value, label).with_extra(extra))
    }

    /// Add an entry, builder style.
    pub fn with(mut self, entry: EnumEntry) -> Self {
        self.push(entry);
        self
    }

    /// Add an entry. Re-using a key replaces the earlier row in place, the
    /// same way inserting into a JSON object does.
    pub fn push(&mut self, entry: EnumEntry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Parse a JSON object of `key => [value, label, extra?]` rows.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if:
    /// - `definition` is not a JSON object
    /// - any row is not a JSON array
    pub fn from_value(definition: &Value) -> Result<Self, EnumError> {
        if !is_type(definition, TypeTag::Object) {
            tracing::warn!(found = %type_tag(definition), "Rejected enum definition");
            return Err(EnumError::invalid_argument(format!(
                "Enum definition must be an object, got {}",
                type_tag(definition)
            )));
        }

        let Value::Object(map) = deep_clone(definition) else {
            return Err(EnumError::invalid_argument("Enum definition must be an object"));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, item) in map {
            match item {
                Value::Array(items) => entries.push(EnumEntry::from_tuple(key, items)),
                other => {
                    tracing::warn!(key = %key, found = %type_tag(&other), "Rejected enum row");
                    return Err(EnumError::invalid_argument(format!(
                        "Enum row '{}' must be an array, got {}",
                        key,
                        type_tag(&other)
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// JSON object form, the inverse of [`from_value`](Self::from_value)
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.entries.len());
        for entry in &self.entries {
            map.insert(entry.key.clone(), entry.to_tuple());
        }
        Value::Object(map)
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<EnumEntry> {
        self.entries
    }
}

impl TryFrom<Value> for EnumDefinition {
    type Error = EnumError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<EnumDefinition> for Value {
    fn from(definition: EnumDefinition) -> Value {
        definition.to_value()
    }
}

impl FromIterator<EnumEntry> for EnumDefinition {
    fn from_iter<I: IntoIterator<Item = EnumEntry>>(iter: I) -> Self {
        let mut definition = Self::new();
        for entry in iter {
            definition.push(entry);
        }
        definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_definition_order() {
        let definition =
            EnumDefinition::from_value(&json!({"b": [2, "B"], "a": [1, "A"], "c": [3, "C"]}))
                .unwrap();
        let keys: Vec<&str> = definition.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        for input in [json!(null), json!([1, 2]), json!("a"), json!(3)] {
            let err = EnumDefinition::from_value(&input).unwrap_err();
            assert!(matches!(err, EnumError::InvalidArgument(_)), "{input}");
        }
    }

    #[test]
    fn test_from_value_rejects_non_array_rows() {
        let err = EnumDefinition::from_value(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, EnumError::InvalidArgument(_)));
        assert!(err.to_string().contains("'a'"));

        let err = EnumDefinition::from_value(&json!({"a": [1, "A"], "b": {"0": 2}})).unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_short_and_long_tuples() {
        let definition =
            EnumDefinition::from_value(&json!({"a": [], "b": [1], "c": [1, "C", "x", "ignored"]}))
                .unwrap();
        let entries = definition.entries();
        assert_eq!(entries[0].value, Value::Null);
        assert_eq!(entries[0].label, Value::Null);
        assert_eq!(entries[1].label, Value::Null);
        assert_eq!(entries[1].extra, None);
        assert_eq!(entries[2].extra, Some(json!("x")));
        assert_eq!(entries[2].to_tuple(), json!([1, "C", "x"]));
    }

    #[test]
    fn test_from_value_is_isolated_from_input() {
        let mut input = json!({"a": [1, "A", {"color": "red"}]});
        let definition = EnumDefinition::from_value(&input).unwrap();
        input["a"][2]["color"] = json!("blue");
        assert_eq!(definition.entries()[0].extra, Some(json!({"color": "red"})));
    }

    #[test]
    fn test_builder_matches_parsed() {
        let built = EnumDefinition::new()
            .entry("DRAFT", 0, "Draft")
            .entry_with_extra("PUBLISHED", 1, "Published", json!({"color": "green"}));
        let parsed = EnumDefinition::from_value(&json!({
            "DRAFT": [0, "Draft"],
            "PUBLISHED": [1, "Published", {"color": "green"}]
        }))
        .unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.to_value(), parsed.to_value());
    }

    #[test]
    fn test_push_replaces_existing_key_in_place() {
        let definition = EnumDefinition::new()
            .entry("a", 1, "A")
            .entry("b", 2, "B")
            .entry("a", 10, "A2");
        assert_eq!(definition.len(), 2);
        assert_eq!(definition.entries()[0].value, json!(10));
        assert_eq!(definition.entries()[1].key, "b");
    }

    #[test]
    fn test_serde_round_trip_uses_object_form() {
        let definition = EnumDefinition::new().entry("a", 1, "A");
        let text = serde_json::to_string(&definition).unwrap();
        assert_eq!(text, r#"{"a":[1,"A"]}"#);
        let back: EnumDefinition = serde_json::from_str(&text).unwrap();
        assert_eq!(back, definition);
    }

    #[test]
    fn test_deserialize_rejects_bad_rows() {
        let result = serde_json::from_str::<EnumDefinition>(r#"{"a": 1}"#);
        assert!(result.is_err());
    }
}
