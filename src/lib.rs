//! # logkv
//!
//! A minimal single-file log-structured key-value store:
//! - Append-only binary log on disk
//! - In-memory index mapping keys to byte offsets
//! - Bounded write buffer for batched sequential appends
//! - Logically-append-only updates and deletes (old bytes are never reclaimed)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │              add / update / delete / show                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │         (record codec, current_position cursor)              │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌──────────────┐
//!     │    Index    │               │ Write Buffer │
//!     │ key→offset  │               │  (encoded)   │
//!     └─────────────┘               └──────┬───────┘
//!                                          │ flush
//!                                          ▼
//!                                   ┌──────────────┐
//!                                   │   Log File   │
//!                                   │ (append-only)│
//!                                   └──────────────┘
//! ```
//!
//! Readers only ever trust the Index: deleted and superseded records stay in
//! the log as dead space and can no longer be reached through any lookup.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;
pub mod log;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LogKvError, Result};
pub use config::Config;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
