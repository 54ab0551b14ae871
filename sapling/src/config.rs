//! The `sapling.toml` configuration file.

use std::{path::Path, str::FromStr};

use eyre::{Result, WrapErr};
use sapling_codegen_go::GoOptions;
use sapling_model::InputModel;
use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sapling.toml";

/// Package used when neither the config nor the command line names one.
pub const DEFAULT_PACKAGE: &str = "models";

/// Parsed `sapling.toml`.
///
/// ```toml
/// [go]
/// package = "events"
/// indent = "tab"
/// constant_typing = "every"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SaplingToml {
    #[serde(default)]
    pub go: GoSection,
}

/// The `[go]` table.
#[derive(Debug, Default, Deserialize)]
pub struct GoSection {
    pub package: Option<String>,
    #[serde(flatten)]
    pub options: GoOptions,
}

impl SaplingToml {
    /// Read and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        content
            .parse()
            .wrap_err_with(|| format!("invalid config '{}'", path.display()))
    }

    /// Read `path`, or the default config file if it exists, or use defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).exists() => Self::open(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for SaplingToml {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Read a processed model document.
pub fn load_input(path: impl AsRef<Path>) -> Result<InputModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("invalid model document '{}'", path.display()))
}
