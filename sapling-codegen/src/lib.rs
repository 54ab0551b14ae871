//! Shared rendering machinery for the Sapling model renderer.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific renderers (e.g., `sapling-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`preset`] - Preset stacks and ordered hook composition
//! - [`generation`] - Render outputs and dependency collection
//! - [`language`] - Language-specific abstractions (ModelGenerator, TypeMapper, etc.)
//! - [`error`] - Render errors

pub mod builder;
pub mod error;
pub mod generation;
pub mod language;
pub mod preset;

pub use builder::{CodeBuilder, Indent};
pub use error::{RenderError, Result};
pub use generation::{CompleteModelsConfig, DependencyCollector, OutputModel, RenderOutput};
pub use language::{ModelGenerator, NamingConvention, TypeMapper};
pub use preset::{HookName, PresetStack};
