//! Tests for the write buffer
//!
//! These tests verify:
//! - Record staging with logical offsets
//! - Offset-based lookup for read-through
//! - Concatenation order for batched flushes

use bytes::Bytes;
use logkv::log::WriteBuffer;

fn record(data: &[u8]) -> Bytes {
    Bytes::copy_from_slice(data)
}

// =============================================================================
// Staging Tests
// =============================================================================

#[test]
fn test_empty_buffer() {
    let buffer = WriteBuffer::new();

    assert!(buffer.is_empty());
    assert_eq!(buffer.record_count(), 0);
    assert_eq!(buffer.byte_len(), 0);
}

#[test]
fn test_push_tracks_counts() {
    let mut buffer = WriteBuffer::new();
    buffer.push(0, record(b"abcd"));
    buffer.push(4, record(b"efg"));

    assert_eq!(buffer.record_count(), 2);
    assert_eq!(buffer.byte_len(), 7);
    assert!(!buffer.is_empty());
}

// =============================================================================
// Offset Lookup Tests
// =============================================================================

#[test]
fn test_find_by_offset() {
    let mut buffer = WriteBuffer::new();
    buffer.push(100, record(b"first"));
    buffer.push(105, record(b"second"));
    buffer.push(111, record(b"third"));

    assert_eq!(buffer.find(105).unwrap().as_ref(), b"second");
    assert_eq!(buffer.find(100).unwrap().as_ref(), b"first");
    assert_eq!(buffer.find(111).unwrap().as_ref(), b"third");
}

#[test]
fn test_find_unknown_offset() {
    let mut buffer = WriteBuffer::new();
    buffer.push(0, record(b"only"));

    // Offsets between record starts never match
    assert!(buffer.find(2).is_none());
    assert!(buffer.find(999).is_none());
}

// =============================================================================
// Flush Support Tests
// =============================================================================

#[test]
fn test_concat_preserves_order() {
    let mut buffer = WriteBuffer::new();
    buffer.push(0, record(b"aa"));
    buffer.push(2, record(b"bb"));
    buffer.push(4, record(b"cc"));

    assert_eq!(buffer.concat(), b"aabbcc");
}

#[test]
fn test_concat_empty() {
    let buffer = WriteBuffer::new();
    assert!(buffer.concat().is_empty());
}

#[test]
fn test_clear_resets_everything() {
    let mut buffer = WriteBuffer::new();
    buffer.push(0, record(b"data"));
    buffer.clear();

    assert!(buffer.is_empty());
    assert_eq!(buffer.byte_len(), 0);
    assert!(buffer.find(0).is_none());
}
