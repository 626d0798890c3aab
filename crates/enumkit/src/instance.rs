//! The immutable enum instance and its accessors.
//!
//! An [`Enum`] is built once from an [`EnumDefinition`] and never changes: all
//! fields are private and every accessor takes `&self`. Lookups by key and by
//! value use separate indexes, so a string key can never shadow a value (or the
//! other way round) inside the index itself. The `label`/`extra` convenience
//! accessors try the key space first and fall back to the value space.

use std::collections::HashMap;
use std::str::FromStr;

use enumkit_common::{is_empty, is_valid_key_list};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::definition::{EnumDefinition, EnumEntry};
use crate::error::EnumError;
use crate::option::EnumOption;

/// Build an [`Enum`] from a JSON definition object.
///
/// # Errors
///
/// Returns `EnumError::InvalidArgument` if `definition` is not an object or any
/// of its rows is not an array.
///
/// # Examples
///
/// ```
/// use enumkit::create_enum;
/// use serde_json::json;
///
/// let status = create_enum(&json!({
///     "DRAFT": [0, "Draft"],
///     "PUBLISHED": [1, "Published", {"color": "green"}]
/// }))?;
///
/// assert_eq!(status.value("PUBLISHED"), Some(&json!(1)));
/// assert_eq!(status.label(&json!(0)), Some(&json!("Draft")));
/// assert!(status.check(&json!(1), "PUBLISHED"));
/// # Ok::<(), enumkit::EnumError>(())
/// ```
pub fn create_enum(definition: &Value) -> Result<Enum, EnumError> {
    EnumDefinition::from_value(definition).map(Enum::new)
}

/// Index key for value-space lookups.
///
/// JSON values are not hashable, so a canonical JSON text stands in for the
/// value: object fields are sorted and a float zero is written without its
/// sign. Two values share a key exactly when they compare equal as `Value`s.
pub(crate) fn value_key(value: &Value) -> String {
    let mut key = String::new();
    write_canonical(value, &mut key);
    key
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(&String, &Value)> = map.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (name, item)) in fields.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(name.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        // -0.0 == 0.0
        Value::Number(n) if n.is_f64() && n.as_f64() == Some(0.0) => out.push_str("0.0"),
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Immutable enumeration built from a definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Enum {
    entries: Vec<EnumEntry>,
    by_key: HashMap<String, usize>,
    by_value: HashMap<String, usize>,
}

impl Enum {
    /// Build the lookup indexes for `definition`.
    ///
    /// When several keys share a value, value lookups resolve to the last of
    /// them in definition order.
    pub fn new(definition: EnumDefinition) -> Self {
        let entries = definition.into_entries();
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            by_key.insert(entry.key.clone(), index);
            if let Some(previous) = by_value.insert(value_key(&entry.value), index) {
                tracing::debug!(
                    value = %entry.value,
                    shadowed = %entries[previous].key,
                    key = %entry.key,
                    "Enum value shared by several keys; last key wins"
                );
            }
        }

        tracing::debug!(entries = entries.len(), "Created enum");
        Self {
            entries,
            by_key,
            by_value,
        }
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Entry for `key`
    pub fn get(&self, key: &str) -> Option<&EnumEntry> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// Entry whose value is `value` (last one wins when values repeat)
    pub fn entry_for_value(&self, value: &Value) -> Option<&EnumEntry> {
        self.by_value
            .get(&value_key(value))
            .map(|&index| &self.entries[index])
    }

    /// Entries in definition order
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Keys in definition order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse lookup: the key holding `value`
    pub fn key_of(&self, value: &Value) -> Option<&str> {
        self.entry_for_value(value).map(|e| e.key.as_str())
    }

    /// Copy of the definition this enum was built from
    pub fn definition(&self) -> EnumDefinition {
        self.entries.iter().cloned().collect()
    }

    /// The keys a selection refers to: the given ones in the given order, or
    /// every key in definition order when `keys` is empty.
    pub fn select_keys<'a, K: AsRef<str>>(&'a self, keys: &'a [K]) -> Vec<&'a str> {
        if is_empty(keys) {
            self.keys().collect()
        } else {
            keys.iter().map(|key| key.as_ref()).collect()
        }
    }

    /// Dynamic form of [`select_keys`](Self::select_keys): `args` selects keys
    /// only when it is non-empty and made up entirely of strings, otherwise
    /// every key is selected.
    pub fn select_keys_from_args<'a>(&'a self, args: &'a [Value]) -> Vec<&'a str> {
        if is_valid_key_list(args) {
            args.iter().filter_map(Value::as_str).collect()
        } else {
            self.keys().collect()
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Value for `key`
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).map(|e| &e.value)
    }

    /// Values for `keys` in the given order, or all values when `keys` is empty.
    ///
    /// Unknown keys yield `None` in their position.
    pub fn values<K: AsRef<str>>(&self, keys: &[K]) -> Vec<Option<&Value>> {
        self.select_keys(keys)
            .into_iter()
            .map(|key| self.value(key))
            .collect()
    }

    /// Values for string `args`, falling back to all values (see
    /// [`select_keys_from_args`](Self::select_keys_from_args)).
    pub fn values_from_args(&self, args: &[Value]) -> Vec<Option<&Value>> {
        self.select_keys_from_args(args)
            .into_iter()
            .map(|key| self.value(key))
            .collect()
    }

    /// Every value in definition order
    pub fn all_values(&self) -> Vec<&Value> {
        self.entries.iter().map(|e| &e.value).collect()
    }

    /// `true` when `candidate` equals the value of `key`.
    ///
    /// Equality is strict: `1` and `"1"` differ, and so do `1` and `1.0`.
    pub fn check(&self, candidate: &Value, key: &str) -> bool {
        self.value(key) == Some(candidate)
    }

    // =========================================================================
    // Labels and extras
    // =========================================================================

    /// Label for a key or a value.
    ///
    /// A string naming a key resolves in the key space; anything else (or a
    /// string that is not a key) resolves in the value space.
    pub fn label(&self, key_or_value: &Value) -> Option<&Value> {
        self.resolve(key_or_value).map(|e| &e.label)
    }

    pub fn label_for_key(&self, key: &str) -> Option<&Value> {
        self.get(key).map(|e| &e.label)
    }

    pub fn label_for_value(&self, value: &Value) -> Option<&Value> {
        self.entry_for_value(value).map(|e| &e.label)
    }

    /// Extra metadata for a key or a value, resolved like [`label`](Self::label).
    pub fn extra(&self, key_or_value: &Value) -> Option<&Value> {
        self.resolve(key_or_value).and_then(|e| e.extra.as_ref())
    }

    pub fn extra_for_key(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(|e| e.extra.as_ref())
    }

    pub fn extra_for_value(&self, value: &Value) -> Option<&Value> {
        self.entry_for_value(value).and_then(|e| e.extra.as_ref())
    }

    fn resolve(&self, key_or_value: &Value) -> Option<&EnumEntry> {
        key_or_value
            .as_str()
            .and_then(|key| self.get(key))
            .or_else(|| self.entry_for_value(key_or_value))
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Option records for `keys`, or for every entry when `keys` is empty.
    ///
    /// One record per selected key, like [`values`](Self::values); a key that is
    /// not part of the enum yields [`EnumOption::unresolved`].
    pub fn options<K: AsRef<str>>(&self, keys: &[K]) -> Vec<EnumOption> {
        self.select_keys(keys)
            .into_iter()
            .map(|key| self.option_for_key(key))
            .collect()
    }

    /// Option records for string `args`, falling back to every entry.
    pub fn options_from_args(&self, args: &[Value]) -> Vec<EnumOption> {
        self.select_keys_from_args(args)
            .into_iter()
            .map(|key| self.option_for_key(key))
            .collect()
    }

    fn option_for_key(&self, key: &str) -> EnumOption {
        self.get(key)
            .map_or_else(EnumOption::unresolved, EnumOption::from)
    }

    /// Option records for every entry in definition order
    pub fn all_options(&self) -> Vec<EnumOption> {
        self.entries.iter().map(EnumOption::from).collect()
    }
}

impl PartialEq for Enum {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl From<EnumDefinition> for Enum {
    fn from(definition: EnumDefinition) -> Self {
        Self::new(definition)
    }
}

impl TryFrom<Value> for Enum {
    type Error = EnumError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        create_enum(&value)
    }
}

impl From<Enum> for Value {
    fn from(instance: Enum) -> Value {
        instance.definition().to_value()
    }
}

impl FromStr for Enum {
    type Err = EnumError;

    /// Parse JSON definition text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let definition: Value = serde_json::from_str(s)?;
        create_enum(&definition)
    }
}
