//! Lexical path cleaning and decomposition.
//!
//! Everything in this module works on path *strings*. Cleaning never touches
//! the filesystem; only the [`oracle`] and [`enumerate`] stages do.
//!
//! # Pipeline
//!
//! [`PathEngine::clean`] runs these stages in order:
//!
//! 1. [`validate`]: reject forbidden characters, reserved device names and
//!    foreign drive letters.
//! 2. [`prefix`]: split off a network prefix (`\\`, `//`, `smb://`,
//!    `sftp://`), translate it to the grammar's spelling and turn every `\`
//!    in the body into `/`.
//! 3. [`collapse`]: squeeze separator runs, drop surplus colons (Windows)
//!    and trailing dots.
//! 4. [`resolve`]: eliminate `.` and `..` segments.
//!
//! The stages repeat until the string stops changing, so cleaning a cleaned
//! path is a no-op.
//!
//! # Grammars
//!
//! The rules that differ between platforms live in [`Grammar`]. The engine
//! takes one as a value, so Windows paths can be cleaned on a POSIX host and
//! vice versa:
//!
//! ```
//! use lexpath::{Grammar, PathEngine};
//!
//! let windows = PathEngine::new(Grammar::Windows);
//! assert_eq!(windows.clean("smb://fileserver\\docs\\.\\q3.xlsx"), "\\\\fileserver/docs/q3.xlsx");
//!
//! let posix = PathEngine::new(Grammar::Posix);
//! assert_eq!(posix.clean("\\\\fileserver\\docs"), "//fileserver/docs");
//! ```

pub mod collapse;
pub mod decompose;
pub mod engine;
pub mod enumerate;
pub mod grammar;
pub mod oracle;
pub mod prefix;
pub mod resolve;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use decompose::Decomposed;
pub use engine::PathEngine;
pub use enumerate::EntryKind;
pub use grammar::{Grammar, SEPARATOR};
pub use prefix::NetworkPrefix;
