//! Configuration system for lexpath.
//!
//! Configuration controls which grammar the engine applies, which directory
//! entries enumeration skips, and how the CLI formats structured output.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LEXPATH_*`)
//! 3. Private project config (`lexpath.local.yaml`)
//! 4. Project config (`lexpath.yaml`)
//! 5. User config (`~/.lexpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use lexpath::config::ConfigBuilder;
//! use lexpath::PathEngine;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let engine = PathEngine::from_config(&config);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use lexpath::config::{Config, ConfigBuilder, GrammarChoice};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         grammar: Some(GrammarChoice::Windows),
//!         ignored_entries: Some(vec![".git".to_string()]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.grammar, Some(GrammarChoice::Windows));
//! assert_eq!(
//!     config.ignored_entries,
//!     Some(vec![".svn".to_string(), ".git".to_string()])
//! );
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GrammarChoice, OutputFormat};
pub use validator::ConfigValidator;
