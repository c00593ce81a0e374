//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::grammar::{INVALID_SEPARATOR, SEPARATOR};

/// Validates a merged or single-source configuration.
///
/// # Examples
///
/// ```
/// use lexpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config {
///     ignored_entries: Some(vec!["a/b".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref ignored) = config.ignored_entries {
            for (idx, entry) in ignored.iter().enumerate() {
                Self::validate_entry_name(&format!("ignored_entries[{idx}]"), entry)?;
            }
        }

        Ok(())
    }

    /// An ignored entry is matched against single directory entry names, so
    /// it must look like one.
    fn validate_entry_name(field: &str, value: &str) -> Result<()> {
        let fail = |message: &str| {
            Err(Error::Validation {
                field: field.into(),
                message: message.into(),
            })
        };

        if value.is_empty() {
            return fail("Cannot be empty");
        }

        if value.contains([SEPARATOR, INVALID_SEPARATOR]) {
            return fail("Cannot contain a path separator");
        }

        if value == "." || value == ".." {
            return fail("'.' and '..' are always skipped");
        }

        if value.contains('\0') {
            return fail("Cannot contain null bytes");
        }

        Ok(())
    }
}
