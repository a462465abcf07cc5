//! Configuration for the phonebook
//!
//! Centralized configuration with sensible defaults.

use crate::error::{PhonebookError, Result};

/// Bucket count used when none is configured
pub const DEFAULT_TABLE_SIZE: usize = 100_000;

/// Longest input line (in bytes, excluding the terminator) the loader keeps
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Main configuration for a phonebook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Number of buckets. Fixed for the lifetime of the table, never rehashed.
    pub table_size: usize,

    // -------------------------------------------------------------------------
    // Loader Configuration
    // -------------------------------------------------------------------------
    /// Lines longer than this are truncated before parsing
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject values the table or loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.table_size == 0 {
            return Err(PhonebookError::Config(
                "table_size must be at least 1".to_string(),
            ));
        }
        if self.max_line_len == 0 {
            return Err(PhonebookError::Config(
                "max_line_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of buckets
    pub fn table_size(mut self, size: usize) -> Self {
        self.config.table_size = size;
        self
    }

    /// Set the maximum accepted line length (in bytes)
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
