//! Join command implementation.

use crate::error::CliError;
use crate::utils::{load_engine, GlobalOptions};
use clap::Args;

/// Join two path fragments with exactly one separator.
#[derive(Args)]
pub struct JoinCommand {
    /// Leading fragment
    pub first: String,

    /// Trailing fragment
    pub second: String,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, _) = load_engine(global)?;
        println!("{}", engine.join(&self.first, &self.second));
        Ok(())
    }
}
