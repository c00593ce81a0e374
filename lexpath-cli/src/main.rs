//! Main entry point for the lexpath CLI.
//!
//! This is the command-line interface for the lexpath normalization engine.
//! It provides commands for working with path strings:
//! - `clean`, `join`, `absolute`: Produce canonical paths
//! - `split`: Decompose a path
//! - `stat`, `ls`: Query the filesystem
//! - `cwd`, `separator`, `config`: Show the environment

use clap::Parser;
use lexpath_cli::cli::{Cli, Command};
use lexpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through the stderr logger
    let logger = lexpath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("logging unavailable: {e}"));
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        grammar: cli.grammar,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        Command::Clean(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Absolute(cmd) => cmd.execute(&global),
        Command::Cwd(cmd) => cmd.execute(&global),
        Command::Separator(cmd) => cmd.execute(&global),
        Command::Split(cmd) => cmd.execute(&global),
        Command::Stat(cmd) => cmd.execute(&global),
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Config(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
