use std::fmt;

use sapling_codegen::Indent;
use serde::Deserialize;

use crate::GoPreset;

/// Which constants of a `const (...)` block restate the enum type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstantTyping {
    /// Only the first constant carries the type, as `gofmt` output usually does.
    #[default]
    FirstOnly,
    /// Every constant carries the type.
    Every,
}

/// Options of the Go generator.
///
/// The serializable part deserializes from the `[go]` table of a config file:
///
/// ```toml
/// indent = { spaces = 4 }
/// constant_typing = "every"
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoOptions {
    pub indent: Indent,
    pub constant_typing: ConstantTyping,
    /// Caller presets, applied after the defaults in this order.
    #[serde(skip)]
    pub presets: Vec<GoPreset>,
}

impl GoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation of struct bodies and constant blocks.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn constant_typing(mut self, typing: ConstantTyping) -> Self {
        self.constant_typing = typing;
        self
    }

    /// Add a preset on top of the ones already registered.
    pub fn preset(mut self, preset: GoPreset) -> Self {
        self.presets.push(preset);
        self
    }
}

impl fmt::Debug for GoOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoOptions")
            .field("indent", &self.indent)
            .field("constant_typing", &self.constant_typing)
            .field("presets", &self.presets.len())
            .finish()
    }
}
