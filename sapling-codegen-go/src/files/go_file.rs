use std::path::{Path, PathBuf};

use sapling_codegen::OutputModel;
use sapling_core::{FileRules, GeneratedFile};

/// One complete Go source file holding a single model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    file_name: String,
    content: String,
}

impl GoFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// File for a model rendered with `generate_complete_models`.
    pub fn from_output(output: &OutputModel) -> Self {
        Self::new(&output.file_name, &output.text)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl GeneratedFile for GoFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
