//! Key-list validation for "select these keys, or all of them" arguments.

use serde_json::Value;

use crate::value::{is_empty, is_type, TypeTag};

/// Returns `true` when `args` names an explicit selection of keys.
///
/// A list is valid when it is non-empty and every element is a string.
/// Anything else means "no explicit selection", and callers fall back to
/// every key.
///
/// # Examples
///
/// ```
/// use enumkit_common::is_valid_key_list;
/// use serde_json::json;
///
/// assert!(is_valid_key_list(&[json!("a"), json!("b")]));
/// assert!(!is_valid_key_list(&[]));
/// assert!(!is_valid_key_list(&[json!("a"), json!(1)]));
/// ```
pub fn is_valid_key_list(args: &[Value]) -> bool {
    !is_empty(args) && args.iter().all(|arg| is_type(arg, TypeTag::String))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_list_is_not_a_selection() {
        assert!(!is_valid_key_list(&[]));
    }

    #[test]
    fn test_all_strings_is_a_selection() {
        assert!(is_valid_key_list(&[json!("DRAFT")]));
        assert!(is_valid_key_list(&[json!(""), json!("b")]));
    }

    #[test]
    fn test_any_non_string_disqualifies() {
        assert!(!is_valid_key_list(&[json!("a"), json!(null)]));
        assert!(!is_valid_key_list(&[json!({"arguType": "key"})]));
        assert!(!is_valid_key_list(&[json!(["a"])]));
    }
}
