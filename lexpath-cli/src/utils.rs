//! Utility functions for CLI operations.
//!
//! Configuration loading, engine construction and output helpers shared by
//! the commands.

use crate::error::CliError;
use clap::ValueEnum;
use lexpath::config::{GrammarChoice, OutputFormat};
use lexpath::{Config, ConfigBuilder, PathEngine};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Grammar requested on the command line or through `LEXPATH_GRAMMAR`.
    pub grammar: Option<GrammarArg>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Grammar selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GrammarArg {
    /// The grammar of the host operating system
    Native,
    /// Windows rules: drive letters, `\\` network paths, reserved device names
    Windows,
    /// POSIX rules: single root, `//`, `smb://` and `sftp://` network paths
    Posix,
}

impl From<GrammarArg> for GrammarChoice {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Native => GrammarChoice::Native,
            GrammarArg::Windows => GrammarChoice::Windows,
            GrammarArg::Posix => GrammarChoice::Posix,
        }
    }
}

/// Output format flag for commands that print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One `key: value` pair or item per line
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    if let Some(grammar) = global.grammar {
        builder = builder.with_config(Config {
            grammar: Some(grammar.into()),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the path engine the effective configuration describes.
pub fn load_engine(global: &GlobalOptions) -> Result<(PathEngine, Config), CliError> {
    let config = load_configuration(global)?;
    let engine = PathEngine::from_config(&config);
    if global.verbose {
        eprintln!("Using {} grammar", engine.grammar());
    }
    Ok((engine, config))
}

/// Pick the output format: explicit flag first, then configuration.
pub fn resolve_format(flag: Option<FormatArg>, config: &Config) -> OutputFormat {
    flag.map_or_else(|| config.output_format.unwrap_or_default(), Into::into)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Print `key: value` lines on stdout.
pub fn print_pairs(pairs: &[(&str, String)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (key, value) in pairs {
        writeln!(handle, "{key}: {value}")?;
    }
    Ok(())
}
