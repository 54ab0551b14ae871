//! Intermediate model types for the Sapling model renderer.
//!
//! Upstream schema processors (JSON Schema, AsyncAPI) produce a tree of
//! [`ModelNode`]s together with an [`InputModel`] index of every declared
//! model. Renderers treat both as read-only input.
//!
//! # Architecture
//!
//! ```text
//! schema document → processor (external) → sapling-model → codegen → source text
//! ```
//!
//! The types are designed to be:
//! - Language-agnostic (no Go/TypeScript-specific concerns)
//! - Deserializable from the processor's JSON output
//! - Cheap to share across threads (plain owned data, no interior mutability)

mod context;
mod input;
mod node;
mod types;

pub use input::InputModel;
pub use node::{ModelKind, ModelNode};
pub use types::{ModelType, TypeTag};
