//! Absolute command implementation.

use crate::error::CliError;
use crate::utils::{load_engine, GlobalOptions};
use clap::Args;

/// Anchor a path at the working directory unless it is already absolute.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to make absolute
    pub path: String,
}

impl AbsoluteCommand {
    /// Execute the absolute command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, _) = load_engine(global)?;
        let absolute = engine.to_absolute(&self.path);
        if absolute.is_empty() {
            return Err(CliError::InvalidArguments(format!(
                "cannot make '{}' absolute",
                self.path
            )));
        }
        println!("{absolute}");
        Ok(())
    }
}
