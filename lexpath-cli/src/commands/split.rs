//! Split command implementation.
//!
//! Prints the directory, basename and extension of a cleaned path.

use crate::error::CliError;
use crate::utils::{load_engine, print_json, print_pairs, resolve_format, FormatArg, GlobalOptions};
use clap::Args;
use lexpath::config::OutputFormat;

/// Decompose a path into directory, basename and extension.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to decompose
    pub path: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, config) = load_engine(global)?;
        let parts = engine.decompose(&self.path);

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&parts),
            OutputFormat::Text => print_pairs(&[
                ("directory", parts.directory),
                ("basename", parts.basename),
                ("extension", parts.extension),
            ]),
        }
    }
}
