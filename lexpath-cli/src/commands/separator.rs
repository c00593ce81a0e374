//! Command to print the canonical separator.

use crate::error::CliError;
use crate::utils::{load_engine, GlobalOptions};
use clap::Args;

/// Print the separator used in cleaned paths.
#[derive(Args)]
pub struct SeparatorCommand {}

impl SeparatorCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, _) = load_engine(global)?;
        println!("{}", engine.separator());
        Ok(())
    }
}
