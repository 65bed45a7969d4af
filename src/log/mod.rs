//! Log Module
//!
//! Binary record codec and the in-memory write buffer feeding the
//! append-only log file.
//!
//! ## Responsibilities
//! - Encode key/value pairs into the on-disk record format
//! - Decode records back from a file or from buffered bytes
//! - Stage encoded records for batched sequential appends
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Record 1                                    │
//! │ ┌───────────┬───────┬───────────┬─────────┐ │
//! │ │key_len (2)│ key   │val_len (2)│ value   │ │
//! │ └───────────┴───────┴───────────┴─────────┘ │
//! ├─────────────────────────────────────────────┤
//! │ Record 2                                    │
//! │ ┌───────────┬───────┬───────────┬─────────┐ │
//! │ │key_len (2)│ key   │val_len (2)│ value   │ │
//! │ └───────────┴───────┴───────────┴─────────┘ │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Lengths are big-endian u16; key and value are UTF-8. There is no header,
//! footer, checksum, or delimiter. Record start offsets are only known to the
//! index, so the file cannot be safely scanned once deletes or updates have
//! left dead bytes behind.

mod buffer;
mod record;

pub use buffer::WriteBuffer;
pub use record::{decode_record, encode_record, encoded_len, MAX_COMPONENT_LEN};
