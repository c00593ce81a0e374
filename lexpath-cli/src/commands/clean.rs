//! Clean command implementation.

use crate::error::CliError;
use crate::utils::{load_engine, GlobalOptions};
use clap::Args;

/// Normalize one or more paths.
#[derive(Args)]
pub struct CleanCommand {
    /// Paths to clean
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Fail on the first rejected path instead of printing an empty line
    #[arg(long)]
    pub strict: bool,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, _) = load_engine(global)?;

        for raw in &self.paths {
            if self.strict {
                let cleaned = engine
                    .try_clean(raw)
                    .map_err(|e| CliError::SemanticFailure(e.to_string()))?;
                println!("{cleaned}");
            } else {
                println!("{}", engine.clean(raw));
            }
        }

        Ok(())
    }
}
