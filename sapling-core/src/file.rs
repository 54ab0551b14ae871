use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Marker line recognised by Go tooling as "generated, do not edit".
pub const GENERATED_HEADER: &str = "// Code generated by sapling. DO NOT EDIT.";

/// A file produced by a generator.
pub trait GeneratedFile {
    /// Location of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// File body, without the header.
    fn render(&self) -> String;

    /// Exact bytes written to disk: the header, a blank line, then the body.
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{header}\n\n{}", self.render()),
            None => self.render(),
        }
    }

    /// Write the file under `base`, creating parent directories.
    ///
    /// A file whose contents on disk already match is left untouched.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let contents = self.contents();
        if std::fs::read_to_string(&path).is_ok_and(|current| current == contents) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &contents)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already had the same contents.
    Unchanged,
}

/// How a generated file is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRules {
    /// Line placed above the rendered body.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Marked with [`GENERATED_HEADER`].
    pub fn generated() -> Self {
        Self {
            header: Some(GENERATED_HEADER),
        }
    }
}
