//! Command to print the working directory in canonical form.

use crate::error::CliError;
use crate::utils::{load_engine, GlobalOptions};
use clap::Args;

/// Print the working directory, terminated by a separator.
#[derive(Args)]
pub struct CwdCommand {}

impl CwdCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, _) = load_engine(global)?;
        let cwd = engine.working_directory();
        if cwd.is_empty() {
            return Err(CliError::SemanticFailure(
                "working directory is unavailable".to_string(),
            ));
        }
        println!("{cwd}");
        Ok(())
    }
}
