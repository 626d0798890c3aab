//! Compile-time enums
//!
//! When the keys are known up front, [`define_enum!`](crate::define_enum) turns
//! `KEY => (value, "label"[, extra])` rows into a plain Rust `enum` with the same
//! accessors as the runtime [`Enum`](crate::Enum), and can hand its rows over to
//! the runtime type through `definition()`.

/// Declare a Rust enum from `KEY => (value, "label"[, extra])` rows.
///
/// The value type must convert into `serde_json::Value` and compare with `==`.
/// `extra` is a single JSON token tree (`{ ... }`, `[ ... ]`, a literal, ...).
///
/// # Examples
///
/// ```
/// use enumkit::define_enum;
///
/// define_enum! {
///     /// Publication state of an article
///     pub enum Status: i32 {
///         DRAFT => (0, "Draft"),
///         PUBLISHED => (1, "Published", {"color": "green"}),
///     }
/// }
///
/// assert_eq!(Status::PUBLISHED.value(), 1);
/// assert_eq!(Status::from_value(0), Some(Status::DRAFT));
/// assert_eq!(Status::DRAFT.label(), "Draft");
///
/// let runtime = Status::to_enum();
/// assert_eq!(runtime.label_for_key("PUBLISHED"), Some(&serde_json::json!("Published")));
/// ```
#[macro_export]
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $vty:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($value:expr, $label:expr $(, $extra:tt)?)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        #[allow(dead_code)]
        impl $name {
            /// Get all variants in declaration order
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Key (variant name)
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            pub fn value(&self) -> $vty {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn extra(&self) -> Option<$crate::__private::serde_json::Value> {
                match self {
                    $($name::$variant => $crate::__define_enum_extra!($($extra)?),)+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                Self::all().iter().copied().find(|v| v.key() == key)
            }

            /// Variant holding `value`; the last one wins when values repeat
            pub fn from_value(value: $vty) -> Option<Self> {
                Self::all().iter().rev().copied().find(|v| v.value() == value)
            }

            /// `true` when `value` is this variant's value
            pub fn check(&self, value: $vty) -> bool {
                self.value() == value
            }

            pub fn options() -> Vec<$crate::EnumOption> {
                Self::all()
                    .iter()
                    .map(|v| $crate::EnumOption {
                        value: v.value().into(),
                        label: v.label().into(),
                        extra: v.extra(),
                    })
                    .collect()
            }

            /// Rows as a runtime definition
            pub fn definition() -> $crate::EnumDefinition {
                Self::all()
                    .iter()
                    .map(|v| {
                        let entry = $crate::EnumEntry::new(v.key(), v.value(), v.label());
                        match v.extra() {
                            Some(extra) => entry.with_extra(extra),
                            None => entry,
                        }
                    })
                    .collect()
            }

            pub fn to_enum() -> $crate::Enum {
                $crate::Enum::new(Self::definition())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::EnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_key(s).ok_or_else(|| {
                    $crate::EnumError::invalid_argument(format!(
                        "Unknown {} key: {}",
                        stringify!($name),
                        s
                    ))
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __define_enum_extra {
    () => {
        None
    };
    ($extra:tt) => {
        Some($crate::__private::serde_json::json!($extra))
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{create_enum, EnumOption};

    define_enum! {
        /// Traffic light
        enum Light: &'static str {
            RED => ("r", "Red", {"stop": true}),
            AMBER => ("a", "Amber"),
            GREEN => ("g", "Green", "go"),
        }
    }

    define_enum! {
        enum Priority: u8 {
            Low => (1, "Low"),
            Normal => (1, "Normal"),
            High => (3, "High"),
        }
    }

    #[test]
    fn test_generated_accessors() {
        assert_eq!(Light::all().len(), 3);
        assert_eq!(Light::AMBER.key(), "AMBER");
        assert_eq!(Light::AMBER.value(), "a");
        assert_eq!(Light::GREEN.label(), "Green");
        assert_eq!(Light::RED.extra(), Some(json!({"stop": true})));
        assert_eq!(Light::AMBER.extra(), None);
        assert_eq!(Light::GREEN.extra(), Some(json!("go")));
        assert!(Light::RED.check("r"));
        assert!(!Light::RED.check("g"));
    }

    #[test]
    fn test_from_key_and_from_str() {
        assert_eq!(Light::from_key("GREEN"), Some(Light::GREEN));
        assert_eq!(Light::from_key("green"), None);
        assert_eq!("RED".parse::<Light>(), Ok(Light::RED));
        assert!("BLUE".parse::<Light>().is_err());
        assert_eq!(Light::AMBER.to_string(), "Amber");
    }

    #[test]
    fn test_from_value_last_wins() {
        assert_eq!(Priority::from_value(1), Some(Priority::Normal));
        assert_eq!(Priority::from_value(3), Some(Priority::High));
        assert_eq!(Priority::from_value(2), None);
    }

    #[test]
    fn test_options_match_runtime_enum() {
        let runtime = create_enum(&json!({
            "RED": ["r", "Red", {"stop": true}],
            "AMBER": ["a", "Amber"],
            "GREEN": ["g", "Green", "go"]
        }))
        .unwrap();
        assert_eq!(Light::options(), runtime.all_options());
        assert_eq!(Light::to_enum(), runtime);
    }

    #[test]
    fn test_definition_keeps_declaration_order() {
        let definition = Priority::definition();
        let keys: Vec<&str> = definition.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Low", "Normal", "High"]);
        assert_eq!(
            Priority::to_enum().label_for_value(&json!(1)),
            Some(&json!("Normal"))
        );
    }

    #[test]
    fn test_option_record_shape() {
        assert_eq!(
            Priority::options()[2],
            EnumOption {
                value: json!(3),
                label: json!("High"),
                extra: None,
            }
        );
    }
}
