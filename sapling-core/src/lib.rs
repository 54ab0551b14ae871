//! Core utilities for the Sapling model renderer.
//!
//! This crate provides the string-case helpers and file-writing primitives
//! shared by every target language.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, FileRules, GeneratedFile, WriteResult};
// String utilities
pub use utils::{json_value_to_string, to_pascal_case, to_snake_case};
