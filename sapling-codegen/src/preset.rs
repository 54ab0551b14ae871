//! Preset stacks and ordered hook composition.
//!
//! A preset is a partial set of hook implementations for one model kind. A
//! [`PresetStack`] holds the built-in default preset followed by caller
//! presets in registration order. Running a hook threads one content value
//! through every stage that implements it:
//!
//! ```text
//! seed ──► default ──► preset 1 ──► preset 2 ──► final content
//! ```
//!
//! Each stage receives the previous stage's output and may return it
//! unchanged, transform it, or replace it. Stages that do not implement the
//! hook pass the content through.

use std::fmt;

use crate::{RenderError, Result};

/// Named rendering decision points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    /// The whole declaration of a model.
    SelfHook,
    /// One field of a struct.
    Field,
    /// Extra body content of a struct, after its fields.
    AdditionalContent,
    /// One constant of an enum.
    Item,
}

impl HookName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::SelfHook => "self",
            HookName::Field => "field",
            HookName::AdditionalContent => "additionalContent",
            HookName::Item => "item",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered presets for one model kind. The first entry is the default.
#[derive(Debug, Clone)]
pub struct PresetStack<P> {
    presets: Vec<P>,
}

impl<P> PresetStack<P> {
    /// Create a stack holding only the default preset.
    pub fn new(default: P) -> Self {
        Self {
            presets: vec![default],
        }
    }

    /// Add a caller preset on top of the stack.
    pub fn preset(mut self, preset: P) -> Self {
        self.presets.push(preset);
        self
    }

    /// Add a caller preset on top of the stack (mutable).
    pub fn push(&mut self, preset: P) {
        self.presets.push(preset);
    }

    /// Number of stages, including the default preset.
    pub fn stage_count(&self) -> usize {
        self.presets.len()
    }

    /// Run one hook through the stack.
    ///
    /// `select` picks the hook implementation out of a preset, `invoke` calls
    /// it with the content produced so far. A failing stage aborts the chain
    /// with [`RenderError::HookFailure`] naming the model, hook, and stage
    /// (0 is the default preset).
    pub fn run_hook<H, S, I>(
        &self,
        hook: HookName,
        model: &str,
        seed: String,
        select: S,
        mut invoke: I,
    ) -> Result<String>
    where
        H: ?Sized,
        S: Fn(&P) -> Option<&H>,
        I: FnMut(&H, String) -> eyre::Result<String>,
    {
        let mut content = seed;

        for (stage, preset) in self.presets.iter().enumerate() {
            let Some(implementation) = select(preset) else {
                continue;
            };
            tracing::trace!(%hook, model, stage, "running hook stage");
            content = invoke(implementation, content).map_err(|source| {
                RenderError::HookFailure {
                    model: model.to_string(),
                    hook,
                    stage,
                    source: source.into(),
                }
            })?;
        }

        Ok(content)
    }
}
