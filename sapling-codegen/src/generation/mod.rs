//! Render outputs and dependency collection.
//!
//! - [`RenderOutput`] - Text and dependencies of one render call
//! - [`OutputModel`] - A render output with its model's naming metadata
//! - [`DependencyCollector`] - Per-render dependency tracking
//! - [`CompleteModelsConfig`] - Settings for complete source files

mod config;
mod dependencies;
mod output;

pub use config::CompleteModelsConfig;
pub use dependencies::DependencyCollector;
pub use output::{OutputModel, RenderOutput};
