//! Common helpers shared by the enumkit crates.
//!
//! This crate provides pure functions over [`serde_json::Value`] that the
//! enum factory uses to validate and copy caller input.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only serde_json
//! - **No enum types** - nothing here knows about definitions or entries

pub mod keys;
pub mod value;

// Re-export commonly used functions at crate root for convenience
pub use keys::is_valid_key_list;
pub use value::{deep_clone, is_empty, is_type, type_tag, IsEmpty, TypeTag};
