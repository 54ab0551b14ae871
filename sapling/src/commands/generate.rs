use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use sapling_codegen::{CompleteModelsConfig, ModelGenerator};
use sapling_codegen_go::{Generator, files::GoFile};
use sapling_core::{GeneratedFile, WriteResult};
use sapling_model::InputModel;

use crate::config::{DEFAULT_PACKAGE, SaplingToml, load_input};

#[derive(Args)]
pub struct GenerateCommand {
    /// Processed model document (JSON)
    pub input: PathBuf,

    /// Path to sapling.toml (defaults to ./sapling.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Go package name, overriding the config file
    #[arg(short, long)]
    pub package: Option<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = SaplingToml::discover(self.config.as_deref())?;
        let input = load_input(&self.input)?;

        let package = self
            .package
            .clone()
            .or(config.go.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        let generator = Generator::new(config.go.options);

        let (files, failed) = render_files(&generator, &input, &CompleteModelsConfig::new(package));

        if self.dry_run {
            self.run_preview(&files);
        } else {
            self.run_generation(&files)?;
        }

        if failed > 0 {
            eyre::bail!("{failed} of {} models failed to render", files.len() + failed);
        }
        Ok(())
    }

    fn run_generation(&self, files: &[GoFile]) -> Result<()> {
        for file in files {
            let result = file
                .write(&self.output)
                .wrap_err_with(|| format!("Failed to write {}", file.file_name()))?;
            let marker = match result {
                WriteResult::Written => '+',
                WriteResult::Unchanged => '=',
            };
            println!("  {marker} {}", file.path(&self.output).display());
        }

        println!();
        println!("Generated {} files in {}", files.len(), self.output.display());
        Ok(())
    }

    fn run_preview(&self, files: &[GoFile]) {
        for file in files {
            println!("── {} ──", file.file_name());
            println!("{}", file.contents());
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());
    }
}

/// Render every model as a file, printing each failure as a diagnostic.
///
/// Returns the rendered files and the number of models that failed.
fn render_files(
    generator: &Generator,
    input: &InputModel,
    config: &CompleteModelsConfig,
) -> (Vec<GoFile>, usize) {
    let mut files = Vec::new();
    let mut failed = 0;

    for result in generator.generate_complete_models(input, config) {
        match result {
            Ok(output) => files.push(GoFile::from_output(&output)),
            Err(err) => {
                failed += 1;
                eprintln!("{:?}", miette::Report::new(err));
            }
        }
    }

    tracing::info!(rendered = files.len(), failed, "rendered models");
    (files, failed)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const DOCUMENT: &str = r#"{
        "models": {
            "pet": {
                "$id": "pet",
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            },
            "email": { "$id": "email", "type": "string" }
        }
    }"#;

    fn command(temp: &TempDir) -> GenerateCommand {
        let input = temp.path().join("models.json");
        fs::write(&input, DOCUMENT).unwrap();
        GenerateCommand {
            input,
            config: None,
            package: Some("pets".to_string()),
            output: temp.path().join("out"),
            dry_run: false,
        }
    }

    #[test]
    fn test_render_files_counts_failures() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let input = load_input(&cmd.input).unwrap();

        let (files, failed) = render_files(
            &Generator::default(),
            &input,
            &CompleteModelsConfig::new("pets"),
        );

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), "pet.go");
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_run_writes_files_and_reports_failures() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);

        let err = cmd.run().unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 models failed to render");

        let written = fs::read_to_string(temp.path().join("out").join("pet.go")).unwrap();
        assert_eq!(
            written,
            "// Code generated by sapling. DO NOT EDIT.\n\n\
             package pets\n\n\
             // Pet represents a Pet model.\n\
             type Pet struct {\n\
             \tName string `json:\"name,omitempty\"`\n\
             }\n"
        );
    }
}
