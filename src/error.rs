//! Error types for logkv
//!
//! Provides a unified error type for all operations.
//!
//! Logical outcomes ("key not found", "key already exists") are never errors;
//! they are reported as boolean/`Option` results on the `Store` operations.
//! A truncated read during `show` likewise degrades to a not-found result
//! rather than failing the session.

use thiserror::Error;

/// Result type alias using LogKvError
pub type Result<T> = std::result::Result<T, LogKvError>;

/// Unified error type for logkv operations
#[derive(Debug, Error)]
pub enum LogKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// A key or value whose UTF-8 encoding does not fit the 16-bit length
    /// prefix of the record format. Aborts the single operation with no
    /// partial state change.
    #[error("Validation error: {0}")]
    Validation(String),
}
