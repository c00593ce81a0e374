//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CleanCommand, CompletionsCommand, ConfigCommand, CwdCommand, JoinCommand,
    LsCommand, SeparatorCommand, SplitCommand, StatCommand,
};
use crate::utils::GrammarArg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for lexical path normalization.
#[derive(Parser)]
#[command(name = "lexpath")]
#[command(version, about = "Normalize and inspect path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to apply
    #[arg(long, value_enum, global = true, env = "LEXPATH_GRAMMAR", ignore_case = true)]
    pub grammar: Option<GrammarArg>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "LEXPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize one or more paths
    Clean(CleanCommand),

    /// Join two path fragments
    Join(JoinCommand),

    /// Anchor a path at the working directory
    Absolute(AbsoluteCommand),

    /// Print the working directory
    Cwd(CwdCommand),

    /// Print the canonical separator
    Separator(SeparatorCommand),

    /// Decompose a path into directory, basename and extension
    Split(SplitCommand),

    /// Report what exists at a path
    Stat(StatCommand),

    /// List the files and folders of a directory
    Ls(LsCommand),

    /// Show the effective configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
