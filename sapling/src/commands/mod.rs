mod completions;
mod generate;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "sapling")]
#[command(version)]
#[command(about = "Render processed schema models as Go source files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Go file per model of a processed model document
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "sapling",
            "generate",
            "models.json",
            "--package",
            "events",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.input.to_str(), Some("models.json"));
                assert_eq!(cmd.package.as_deref(), Some("events"));
                assert_eq!(cmd.output.to_str(), Some("."));
                assert!(cmd.dry_run);
                assert!(cmd.config.is_none());
            }
            Commands::Completions(_) => panic!("expected generate"),
        }
    }
}
