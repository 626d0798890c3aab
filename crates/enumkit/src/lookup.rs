//! Configurable lookups
//!
//! These accessors take an explicit [`LookupConfig`] that says whether an
//! argument is a key or a value, and which field names option records use for
//! the label and the value. Callers bridging from variadic JSON arguments,
//! where the configuration rides along as a trailing object, can split it off
//! with [`split_trailing_config`].

use enumkit_common::is_empty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::definition::EnumEntry;
use crate::error::EnumError;
use crate::instance::Enum;

/// Field names a configuration object may carry
const CONFIG_KEYS: &[&str] = &["arguType", "labelKey", "valueKey"];

/// How a lookup argument is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArgType {
    /// The argument is an enum key
    #[default]
    Key,
    /// The argument is an enum value
    Value,
}

impl ArgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::Key => "key",
            ArgType::Value => "value",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArgType {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(ArgType::Key),
            "value" => Ok(ArgType::Value),
            _ => Err(EnumError::invalid_argument(format!(
                "arguType must be \"key\" or \"value\", got \"{}\"",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ArgType {
    type Error = EnumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ArgType> for String {
    fn from(arg_type: ArgType) -> String {
        arg_type.as_str().to_string()
    }
}

/// Lookup configuration
///
/// Every field is optional on input; defaults are `arguType: "key"`,
/// `labelKey: "label"` and `valueKey: "value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LookupConfig {
    pub argu_type: ArgType,
    /// Field name for the label in option records
    pub label_key: String,
    /// Field name for the value in option records
    pub value_key: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            argu_type: ArgType::Key,
            label_key: "label".to_string(),
            value_key: "value".to_string(),
        }
    }
}

impl LookupConfig {
    /// Default configuration with arguments read as values
    pub fn by_value() -> Self {
        Self {
            argu_type: ArgType::Value,
            ..Self::default()
        }
    }

    pub fn with_label_key(mut self, label_key: impl Into<String>) -> Self {
        self.label_key = label_key.into();
        self
    }

    pub fn with_value_key(mut self, value_key: impl Into<String>) -> Self {
        self.value_key = value_key.into();
        self
    }

    /// Parse a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if `config` is not an object, carries
    /// an `arguType` other than `"key"`/`"value"`, or has fields of the wrong type.
    pub fn from_value(config: &Value) -> Result<Self, EnumError> {
        if !config.is_object() {
            return Err(EnumError::invalid_argument(
                "Lookup configuration must be an object",
            ));
        }
        serde_json::from_value(config.clone()).map_err(|err| {
            tracing::warn!(error = %err, "Rejected lookup configuration");
            EnumError::invalid_argument(err.to_string())
        })
    }

    /// Option record using the configured field names. A selector that
    /// resolved to no entry gets a `null` label and keeps `value`.
    fn record(&self, value: &Value, entry: Option<&EnumEntry>) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(self.value_key.clone(), value.clone());
        record.insert(
            self.label_key.clone(),
            entry.map_or(Value::Null, |e| e.label.clone()),
        );
        if let Some(extra) = entry.and_then(|e| e.extra.as_ref()) {
            record.insert("extra".to_string(), extra.clone());
        }
        record
    }
}

/// `true` when `arg` looks like a configuration object: a JSON object whose
/// fields are all configuration fields.
///
/// Keys are strings and values are usually scalars, so neither is mistaken for
/// a configuration object. An object-valued enum value with only those field
/// names would be; pass the configuration explicitly in that case. The empty
/// object `{}` counts as a configuration.
pub fn is_config_object(arg: &Value) -> bool {
    arg.as_object()
        .is_some_and(|map| map.keys().all(|key| CONFIG_KEYS.contains(&key.as_str())))
}

/// Split a trailing configuration object off `args`.
///
/// Returns the remaining arguments and the parsed configuration, or the whole
/// list and [`LookupConfig::default`] when the last argument is not a
/// configuration object.
///
/// # Errors
///
/// Returns `EnumError::InvalidArgument` if the trailing object has an invalid
/// `arguType`.
pub fn split_trailing_config(args: &[Value]) -> Result<(&[Value], LookupConfig), EnumError> {
    match args.split_last() {
        Some((last, rest)) if is_config_object(last) => {
            Ok((rest, LookupConfig::from_value(last)?))
        }
        _ => Ok((args, LookupConfig::default())),
    }
}

impl Enum {
    /// Value for `key`
    pub fn val(&self, key: &str) -> Option<&Value> {
        self.value(key)
    }

    /// Values for `keys`, or all values when `keys` is empty
    pub fn val_list<K: AsRef<str>>(&self, keys: &[K]) -> Vec<Option<&Value>> {
        self.values(keys)
    }

    /// `key => value` map for `keys` (all keys when empty); unknown keys map
    /// to `null`
    pub fn val_map<K: AsRef<str>>(&self, keys: &[K]) -> Map<String, Value> {
        self.select_keys(keys)
            .into_iter()
            .map(|key| (key.to_string(), self.value(key).cloned().unwrap_or(Value::Null)))
            .collect()
    }

    /// Label for `arg`, read as a key or as a value depending on
    /// `config.argu_type`.
    ///
    /// A non-string argument never matches in the key space.
    pub fn name(&self, arg: &Value, config: &LookupConfig) -> Option<&Value> {
        match config.argu_type {
            ArgType::Key => arg.as_str().and_then(|key| self.label_for_key(key)),
            ArgType::Value => self.label_for_value(arg),
        }
    }

    pub fn name_by_value(&self, value: &Value) -> Option<&Value> {
        self.label_for_value(value)
    }

    /// Option records with configurable field names.
    ///
    /// With `ArgType::Key`, `args` selects keys when it is a non-empty list of
    /// strings and every entry otherwise. With `ArgType::Value`, `args` lists
    /// values, and an empty list selects every entry. Every selector yields one
    /// record: an unknown key gets a `null` value and label, an unknown value
    /// keeps its value and gets a `null` label.
    pub fn options_with(&self, args: &[Value], config: &LookupConfig) -> Vec<Map<String, Value>> {
        match config.argu_type {
            ArgType::Key => self
                .select_keys_from_args(args)
                .into_iter()
                .map(|key| {
                    let entry = self.get(key);
                    config.record(entry.map_or(&Value::Null, |e| &e.value), entry)
                })
                .collect(),
            ArgType::Value if is_empty(args) => self
                .entries()
                .iter()
                .map(|entry| config.record(&entry.value, Some(entry)))
                .collect(),
            ArgType::Value => args
                .iter()
                .map(|value| config.record(value, self.entry_for_value(value)))
                .collect(),
        }
    }

    /// Option records for `values` (every entry when empty). The configuration's
    /// `argu_type` is ignored; arguments are always values.
    pub fn options_by_values(
        &self,
        values: &[Value],
        config: &LookupConfig,
    ) -> Vec<Map<String, Value>> {
        let config = LookupConfig {
            argu_type: ArgType::Value,
            ..config.clone()
        };
        self.options_with(values, &config)
    }

    /// Option records for variadic JSON arguments whose last element may be a
    /// configuration object.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if the trailing configuration is
    /// invalid.
    pub fn options_from_variadic(
        &self,
        args: &[Value],
    ) -> Result<Vec<Map<String, Value>>, EnumError> {
        let (args, config) = split_trailing_config(args)?;
        Ok(self.options_with(args, &config))
    }
}
