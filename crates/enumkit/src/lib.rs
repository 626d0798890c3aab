//! # enumkit
//!
//! Immutable enumeration objects built from `key => [value, label, extra?]`
//! rows, with lookups by key and by value and option lists for UI.
//!
//! ```text
//! ┌──────────────────────────┐      ┌────────────────────────────┐
//! │ JSON object / builder /  │ ───▶ │ EnumDefinition (deep copy) │
//! │ define_enum! rows        │      └─────────────┬──────────────┘
//! └──────────────────────────┘                    ▼
//!                                   ┌────────────────────────────┐
//!                                   │ Enum (immutable)           │
//!                                   │   key index / value index  │
//!                                   └────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Built once** - an [`Enum`] has no setters; clone it to share
//! 2. **Misses are not errors** - lookups return `Option`
//! 3. **Separate key and value spaces** - explicit `*_for_key` and `*_for_value`
//!    accessors, plus key-first convenience forms
//! 4. **Explicit configuration** - [`LookupConfig`] is a parameter, never a
//!    guessed trailing argument

mod definition;
pub use definition::{EnumDefinition, EnumEntry};

mod error;
pub use error::EnumError;

mod instance;
pub use instance::{create_enum, Enum};

mod lookup;
pub use lookup::{is_config_object, split_trailing_config, ArgType, LookupConfig};

mod option;
pub use option::EnumOption;

mod macros;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
