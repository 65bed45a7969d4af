//! Write buffer
//!
//! Ordered staging area for encoded records awaiting flush.
//!
//! Each buffered record is tagged with the logical offset it will occupy in
//! the log, so reads can be served straight from the buffer before the bytes
//! ever hit disk. The buffer is drained whole on flush, never partially.

use bytes::Bytes;

/// One encoded record staged for flush
#[derive(Debug, Clone)]
struct BufferedRecord {
    /// Logical byte position the record will occupy in the log
    offset: u64,

    /// The fully encoded record bytes
    bytes: Bytes,
}

/// Ordered sequence of encoded records awaiting flush
#[derive(Debug, Default)]
pub struct WriteBuffer {
    /// Records in append order; offsets are strictly increasing
    records: Vec<BufferedRecord>,

    /// Total encoded bytes currently buffered
    byte_len: usize,
}

impl WriteBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an encoded record at its logical offset
    pub fn push(&mut self, offset: u64, bytes: Bytes) {
        self.byte_len += bytes.len();
        self.records.push(BufferedRecord { offset, bytes });
    }

    /// Number of buffered records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Total buffered bytes
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a buffered record by its logical offset
    ///
    /// Offsets are strictly increasing in push order, so this is a binary
    /// search. Returns a cheap clone of the encoded bytes.
    pub fn find(&self, offset: u64) -> Option<Bytes> {
        self.records
            .binary_search_by_key(&offset, |r| r.offset)
            .ok()
            .map(|i| self.records[i].bytes.clone())
    }

    /// Concatenate all buffered records in order into one contiguous chunk
    ///
    /// Used by flush so the whole batch goes out as a single sequential
    /// write; a mid-batch failure then cannot leave a record boundary
    /// ambiguous in the in-memory state.
    pub fn concat(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len);
        for record in &self.records {
            out.extend_from_slice(&record.bytes);
        }
        out
    }

    /// Drop all buffered records
    pub fn clear(&mut self) {
        self.records.clear();
        self.byte_len = 0;
    }
}
