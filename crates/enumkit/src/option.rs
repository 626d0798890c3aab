//! Option records for select boxes and other list-style UI

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::definition::EnumEntry;

/// One `{value, label, extra}` record per enum entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumOption {
    pub value: Value,
    pub label: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl EnumOption {
    /// Record for a selected key that is not part of the enum
    pub fn unresolved() -> Self {
        Self {
            value: Value::Null,
            label: Value::Null,
            extra: None,
        }
    }
}

impl From<&EnumEntry> for EnumOption {
    fn from(entry: &EnumEntry) -> Self {
        Self {
            value: entry.value.clone(),
            label: entry.label.clone(),
            extra: entry.extra.clone(),
        }
    }
}
