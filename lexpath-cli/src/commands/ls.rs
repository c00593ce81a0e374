//! Ls command implementation.
//!
//! Lists the immediate children of a directory: folders first, each ending
//! in a separator, then files. Both groups are sorted.

use crate::error::CliError;
use crate::utils::{load_engine, print_json, resolve_format, FormatArg, GlobalOptions};
use clap::Args;
use lexpath::config::OutputFormat;
use lexpath::EntryKind;
use serde::Serialize;

/// List the files and folders directly inside a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list (defaults to the working directory)
    pub path: Option<String>,

    /// List only files
    #[arg(long, conflicts_with = "folders")]
    pub files: bool,

    /// List only folders
    #[arg(long)]
    pub folders: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

#[derive(Serialize)]
struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    folders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<String>>,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (engine, config) = load_engine(global)?;
        let dir = self.path.unwrap_or_else(|| engine.working_directory());

        let folders = if self.files {
            None
        } else {
            Some(engine.read_entries(&dir, EntryKind::Folders)?)
        };
        let files = if self.folders {
            None
        } else {
            Some(engine.read_entries(&dir, EntryKind::Files)?)
        };

        let listing = Listing { folders, files };

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&listing),
            OutputFormat::Text => {
                for entry in listing.folders.iter().chain(listing.files.iter()).flatten() {
                    println!("{entry}");
                }
                Ok(())
            }
        }
    }
}
