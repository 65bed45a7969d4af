//! Index Module
//!
//! In-memory map from key to the byte offset of its live record in the log.
//!
//! ## Responsibilities
//! - Point lookups: get/put/delete by key
//! - Sole source of truth for retrieval (the log is never scanned)
//!
//! ## Data Structure Choice
//! HashMap for V1:
//! - Amortized O(1) point operations, which is all the contract asks for
//! - No ordering or iteration guarantees required
//!
//! The Index never touches the log file; the `Store` coordinates appends and
//! index updates. An offset stored here points either at a record already on
//! disk or at one still sitting in the write buffer at that logical position.

mod map;

pub use map::Index;
