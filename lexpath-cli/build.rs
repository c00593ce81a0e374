//! Build script for lexpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("lexpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and inspect path strings")
        .long_about(
            "Command-line tool for lexical path normalization under Windows and POSIX grammars",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .help("Path grammar to apply")
                .value_name("GRAMMAR")
                .value_parser(["native", "windows", "posix"])
                .global(true)
                .env("LEXPATH_GRAMMAR"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("LEXPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("clean")
                .about("Normalize one or more paths")
                .long_about("Print the canonical form of each path, or fail with --strict"),
            Command::new("join")
                .about("Join two path fragments")
                .long_about("Join two fragments with exactly one separator between them"),
            Command::new("absolute")
                .about("Anchor a path at the working directory")
                .long_about("Prefix a relative path with the working directory and clean it"),
            Command::new("cwd")
                .about("Print the working directory")
                .long_about("Print the working directory in canonical form with a trailing separator"),
            Command::new("separator")
                .about("Print the canonical separator"),
            Command::new("split")
                .about("Decompose a path into directory, basename and extension"),
            Command::new("stat")
                .about("Report what exists at a path")
                .long_about("Report whether a path exists and whether it is a directory, file or symlink"),
            Command::new("ls")
                .about("List the files and folders of a directory")
                .long_about("List the immediate children of a directory, folders first, sorted"),
            Command::new("config")
                .about("Show the effective configuration")
                .long_about("Print the merged configuration from files, environment and options"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("lexpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
