#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lexpath
//!
//! Lexical path normalization for two path grammars.
//!
//! This library turns loosely written path strings into one canonical form:
//! forward slashes only, no doubled separators, no `.` or `..` segments where
//! they can be resolved, network prefixes spelled the way the target grammar
//! expects. Cleaning is purely textual and never consults the filesystem; a
//! small set of oracle and enumeration operations do.
//!
//! ## Core Types
//!
//! - [`PathEngine`]: cleaning, joining, decomposition, oracle, enumeration
//! - [`Grammar`]: the Windows and POSIX rule sets
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use lexpath::{Grammar, PathEngine};
//!
//! let posix = PathEngine::new(Grammar::Posix);
//! assert_eq!(posix.clean("/usr//local/./lib/../bin/"), "/usr/local/bin/");
//! assert_eq!(posix.join("/srv/", "/www"), "/srv/www");
//!
//! let windows = PathEngine::new(Grammar::Windows);
//! assert_eq!(windows.clean("c:\\temp\\..\\data.csv"), "c:/data.csv");
//! assert_eq!(windows.get_extension("c:\\temp\\report.final.pdf"), "pdf");
//! assert_eq!(windows.clean("c:\\temp\\aux"), "");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Decomposed, EntryKind, Grammar, NetworkPrefix, PathEngine};
