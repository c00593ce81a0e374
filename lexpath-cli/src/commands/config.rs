//! Config command implementation.
//!
//! Shows the configuration every other command would run with, after files,
//! environment variables and global options have been merged.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use lexpath::config::ConfigLoader;
use std::env;

/// Show the effective configuration.
#[derive(Args)]
pub struct ConfigCommand {
    /// List the configuration files that were found instead
    #[arg(long)]
    pub sources: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.sources {
            let working_dir = env::current_dir()?;
            let sources = ConfigLoader::load_all(&working_dir, global.config_dir.as_deref())?;
            for source in sources {
                println!("{}", source.path.display());
            }
            return Ok(());
        }

        let config = load_configuration(global)?;
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CliError::Config(format!("cannot render configuration: {e}")))?;
        print!("{yaml}");
        Ok(())
    }
}
