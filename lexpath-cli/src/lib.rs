//! Library exports for lexpath-cli.
//!
//! The `lexpath` binary is a thin `main` over these modules: argument
//! definitions, command implementations, error and exit-code mapping, and
//! shared helpers.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
