//! Stat command implementation.
//!
//! Reports what the filesystem holds at a path. A missing path is not an
//! error; every answer is simply `false`.

use crate::error::CliError;
use crate::utils::{load_engine, print_json, print_pairs, resolve_format, FormatArg, GlobalOptions};
use clap::Args;
use lexpath::config::OutputFormat;
use serde::Serialize;

/// Report whether a path exists and what kind of entry it is.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    pub path: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

#[derive(Serialize)]
struct StatReport {
    path: String,
    exists: bool,
    directory: bool,
    file: bool,
    symlink: bool,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, config) = load_engine(global)?;

        let report = StatReport {
            path: engine.clean(&self.path),
            exists: engine.exists(&self.path),
            directory: engine.is_directory(&self.path),
            file: engine.is_file(&self.path),
            symlink: engine.is_symlink(&self.path),
        };

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Text => print_pairs(&[
                ("path", report.path),
                ("exists", report.exists.to_string()),
                ("directory", report.directory.to_string()),
                ("file", report.file.to_string()),
                ("symlink", report.symlink.to_string()),
            ]),
        }
    }
}
