//! Store Module
//!
//! The core store that coordinates all components.
//!
//! ## Responsibilities
//! - Coordinate the Index, write buffer, and log file
//! - Encode records and assign their log offsets
//! - Trigger flushes when the buffer reaches capacity
//! - Serve lookups through the Index (buffer first, then file)
//!
//! ## Execution Model
//!
//! Single-threaded and synchronous: every operation takes `&mut self` (or
//! `&self` for reads) and runs to completion before the next begins. The log
//! file is opened per operation — append mode for flush, read mode for show —
//! as short-lived scoped handles dropped on every exit path.
//!
//! ## Append-Only Policy
//!
//! Updates append a fresh record and repoint the Index; deletes drop the
//! Index entry only. The log never shrinks and dead bytes are never
//! reclaimed. `current_position` tracks the logical end of the log
//! (flushed + buffered bytes) and only ever advances.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::index::Index;
use crate::log::{decode_record, encode_record, WriteBuffer};

/// The single-file log-structured key-value store
pub struct Store {
    /// Store configuration
    config: Config,

    /// Key → offset map; sole source of truth for retrieval
    index: Index,

    /// Encoded records awaiting flush
    buffer: WriteBuffer,

    /// Logical end of the log: flushed bytes + buffered bytes.
    /// Monotonically increasing, advanced only by the append path.
    current_position: u64,
}

impl Store {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the log file if it doesn't exist
    /// 2. Set `current_position` to the existing file size
    ///
    /// The Index starts empty either way: it is rebuilt only by observing
    /// writes, never by reading the file back (no log replay).
    pub fn open(config: Config) -> Result<Self> {
        let current_position = match fs::metadata(&config.log_path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                File::create(&config.log_path)?;
                0
            }
            Err(e) => return Err(e.into()),
        };

        debug!(
            path = %config.log_path.display(),
            position = current_position,
            "opened store"
        );

        Ok(Self {
            config,
            index: Index::new(),
            buffer: WriteBuffer::new(),
            current_position,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified log file path
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().log_path(path).build();
        Self::open(config)
    }

    /// Add a new key-value pair
    ///
    /// Returns `Ok(false)` without any mutation if the key is already
    /// indexed; this is the sole existence check on the write path.
    /// Otherwise appends a record and indexes it, flushing synchronously if
    /// the buffer has reached capacity.
    pub fn add(&mut self, key: &str, value: &str) -> Result<bool> {
        if self.index.contains(key) {
            return Ok(false);
        }

        self.append_record(key, value)?;
        Ok(true)
    }

    /// Update an existing key with a new value
    ///
    /// Returns `Ok(false)` if the key is absent. Otherwise performs a
    /// physical append of a fresh record and repoints the Index to it; the
    /// old record's bytes stay in the log as dead space.
    ///
    /// Shares the unguarded append primitive with `add` rather than routing
    /// through `add`'s existence check, which would reject the still-indexed
    /// key.
    pub fn update(&mut self, key: &str, value: &str) -> Result<bool> {
        if !self.index.contains(key) {
            return Ok(false);
        }

        self.append_record(key, value)?;
        Ok(true)
    }

    /// Delete a key
    ///
    /// Removes the key from the Index only; the record's bytes remain in the
    /// log forever. Returns `false` if the key was absent. Touches no file,
    /// so it cannot fail.
    pub fn delete(&mut self, key: &str) -> bool {
        self.index.delete(key)
    }

    /// Look up a key and return its stored pair
    ///
    /// Resolution order:
    /// 1. Index — absent key is `Ok(None)`
    /// 2. Write buffer — records not yet flushed are served from memory
    /// 3. Log file — seek to the offset and decode
    ///
    /// A log shorter than the record demands (or an undecodable component)
    /// degrades to `Ok(None)` rather than failing the session.
    pub fn show(&self, key: &str) -> Result<Option<(String, String)>> {
        // Step 1: Resolve the offset through the Index
        let offset = match self.index.get(key) {
            Some(offset) => offset,
            None => return Ok(None),
        };

        // Step 2: Unflushed records are invisible to the file; serve them
        // straight from the buffer
        if offset >= self.flushed_position() {
            return match self.buffer.find(offset) {
                Some(bytes) => decode_record(&mut bytes.as_ref()),
                None => Ok(None),
            };
        }

        // Step 3: Read from the log file
        let file = File::open(&self.config.log_path)?;
        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(offset))?;

        decode_record(&mut reader)
    }

    /// Write all buffered records to the log, in buffer order
    ///
    /// The whole batch goes out as one sequential append; the buffer is
    /// cleared only after the write succeeds, so a failed flush leaves the
    /// in-memory state untouched. Idempotent when the buffer is empty.
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let batch = self.buffer.concat();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.log_path)?;
        file.write_all(&batch)?;

        debug!(
            records = self.buffer.record_count(),
            bytes = batch.len(),
            "flushed write buffer"
        );

        self.buffer.clear();
        Ok(())
    }

    /// Flush, then best-effort remove the log file and reset all state
    ///
    /// Used to reset between runs. File-removal failures are swallowed;
    /// afterwards the store is empty and `current_position` is back at zero.
    pub fn cleanup(&mut self) -> Result<()> {
        self.flush()?;

        if let Err(e) = fs::remove_file(&self.config.log_path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(
                    path = %self.config.log_path.display(),
                    "failed to remove log file: {}",
                    e
                );
            }
        }

        self.index.clear();
        self.buffer.clear();
        self.current_position = 0;
        Ok(())
    }

    // =========================================================================
    // Internal Append Path
    // =========================================================================

    /// Encode a record, stage it, and index it at its planned offset
    ///
    /// Shared by `add` (behind the existence guard) and `update`
    /// (unconditionally). Validation failures abort before any state change.
    fn append_record(&mut self, key: &str, value: &str) -> Result<()> {
        // Step 1: Encode (validates component lengths)
        let record = encode_record(key, value)?;
        let record_len = record.len() as u64;

        // Step 2: Stage at the planned offset and index it
        let offset = self.current_position;
        self.buffer.push(offset, record);
        self.index.put(key.to_string(), offset);
        self.current_position += record_len;

        // Step 3: Flush synchronously once the buffer is full
        if self.buffer.record_count() >= self.config.buffer_capacity {
            self.flush()?;
        }

        Ok(())
    }

    /// Byte position up to which the log file holds data
    fn flushed_position(&self) -> u64 {
        self.current_position - self.buffer.byte_len() as u64
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the log file path
    pub fn log_path(&self) -> &Path {
        &self.config.log_path
    }

    /// Logical end of the log (flushed + buffered bytes)
    pub fn current_position(&self) -> u64 {
        self.current_position
    }

    /// Number of records currently buffered
    pub fn buffered_record_count(&self) -> usize {
        self.buffer.record_count()
    }

    /// Number of live keys in the Index
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
