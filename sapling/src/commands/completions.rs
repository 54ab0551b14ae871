use std::{fs::File, io, path::PathBuf};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();

        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
                clap_complete::generate(self.shell, &mut cmd, name, &mut file);
            }
            None => clap_complete::generate(self.shell, &mut cmd, name, &mut io::stdout()),
        }
        Ok(())
    }
}
