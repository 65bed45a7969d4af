//! Configuration for logkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a logkv store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the append-only log file. Created on open if missing.
    pub log_path: PathBuf,

    // -------------------------------------------------------------------------
    // Write Buffer Configuration
    // -------------------------------------------------------------------------
    /// Max number of buffered records before a synchronous flush
    pub buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./storage.db"),
            buffer_capacity: 1000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    /// Set the write buffer capacity (in records)
    pub fn buffer_capacity(mut self, count: usize) -> Self {
        self.config.buffer_capacity = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
