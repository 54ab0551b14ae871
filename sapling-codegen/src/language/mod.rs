//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific rendering:
//! - [`ModelGenerator`] - Main trait for language model generators
//! - [`TypeMapper`] - Trait for mapping model type tags to language types
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{ModelGenerator, TypeMapper};
