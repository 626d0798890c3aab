//! CLI settings loaded from the environment

use enumkit::{ArgType, LookupConfig};

/// Default log filter when neither `ENUMKIT_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "enumkit=info,enumkit_cli=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliSettings {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Configuration used by the `options` command
    pub lookup: LookupConfig,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            lookup: LookupConfig::default(),
        }
    }
}

impl CliSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_filter: var("ENUMKIT_LOG")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
            lookup: LookupConfig {
                argu_type: parsed_or(&var, "ENUMKIT_ARGU_TYPE", ArgType::Key),
                label_key: var("ENUMKIT_LABEL_KEY").unwrap_or(defaults.lookup.label_key),
                value_key: var("ENUMKIT_VALUE_KEY").unwrap_or(defaults.lookup.value_key),
            },
        }
    }
}

fn parsed_or<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    var(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> CliSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(settings_from(&[]), CliSettings::default());
    }

    #[test]
    fn test_enumkit_log_wins_over_rust_log() {
        let settings = settings_from(&[("RUST_LOG", "warn"), ("ENUMKIT_LOG", "debug")]);
        assert_eq!(settings.log_filter, "debug");
        let settings = settings_from(&[("RUST_LOG", "warn")]);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_lookup_overrides() {
        let settings = settings_from(&[
            ("ENUMKIT_ARGU_TYPE", "value"),
            ("ENUMKIT_LABEL_KEY", "text"),
            ("ENUMKIT_VALUE_KEY", "id"),
        ]);
        assert_eq!(
            settings.lookup,
            LookupConfig::by_value().with_label_key("text").with_value_key("id")
        );
    }

    #[test]
    fn test_invalid_argu_type_falls_back_to_key() {
        let settings = settings_from(&[("ENUMKIT_ARGU_TYPE", "both")]);
        assert_eq!(settings.lookup.argu_type, ArgType::Key);
    }
}
