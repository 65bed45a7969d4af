//! Record codec
//!
//! Encoding and decoding of individual log records.
//!
//! Encoding is deterministic: the encoded length is exactly
//! `2 + key_bytes + 2 + value_bytes`, and both byte lengths must fit the
//! 16-bit prefix.

use std::io::{ErrorKind, Read};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{LogKvError, Result};

/// Size of one length prefix in bytes
pub const LEN_PREFIX_SIZE: usize = 2;

/// Maximum encoded byte length for a key or a value (16-bit length prefix)
pub const MAX_COMPONENT_LEN: usize = u16::MAX as usize;

/// Total encoded length of a record for the given key/value pair
pub fn encoded_len(key: &str, value: &str) -> usize {
    LEN_PREFIX_SIZE + key.len() + LEN_PREFIX_SIZE + value.len()
}

/// Encode a key/value pair into one log record
///
/// Format: key_len (2, BE) + key + value_len (2, BE) + value
///
/// Returns a validation error if either component's UTF-8 encoding exceeds
/// [`MAX_COMPONENT_LEN`] bytes; nothing is written in that case.
pub fn encode_record(key: &str, value: &str) -> Result<Bytes> {
    let key_bytes = key.as_bytes();
    let value_bytes = value.as_bytes();

    if key_bytes.len() > MAX_COMPONENT_LEN {
        return Err(LogKvError::Validation(format!(
            "key length {} exceeds {} bytes",
            key_bytes.len(),
            MAX_COMPONENT_LEN
        )));
    }
    if value_bytes.len() > MAX_COMPONENT_LEN {
        return Err(LogKvError::Validation(format!(
            "value length {} exceeds {} bytes",
            value_bytes.len(),
            MAX_COMPONENT_LEN
        )));
    }

    let mut record = BytesMut::with_capacity(encoded_len(key, value));
    record.put_u16(key_bytes.len() as u16);
    record.put_slice(key_bytes);
    record.put_u16(value_bytes.len() as u16);
    record.put_slice(value_bytes);

    Ok(record.freeze())
}

/// Decode one record from a reader positioned at a record start
///
/// Reads 2 length bytes, that many key bytes, 2 more length bytes, and that
/// many value bytes, decoding both components as UTF-8.
///
/// Returns:
/// - `Ok(Some((key, value)))` — a structurally complete record
/// - `Ok(None)` — the source ended before the record did, or a component was
///   not valid UTF-8; retrieval degrades to not-found instead of failing
/// - `Err(_)` — an underlying I/O failure other than a short read
pub fn decode_record(reader: &mut impl Read) -> Result<Option<(String, String)>> {
    let key = match read_component(reader)? {
        Some(bytes) => bytes,
        None => return Ok(None),
    };
    let value = match read_component(reader)? {
        Some(bytes) => bytes,
        None => return Ok(None),
    };

    match (String::from_utf8(key), String::from_utf8(value)) {
        (Ok(key), Ok(value)) => Ok(Some((key, value))),
        _ => Ok(None),
    }
}

/// Read one length-prefixed component; `None` on a short read
fn read_component(reader: &mut impl Read) -> Result<Option<Vec<u8>>> {
    let mut len_bytes = [0u8; LEN_PREFIX_SIZE];
    if let Err(e) = reader.read_exact(&mut len_bytes) {
        return short_read_as_none(e);
    }
    let len = u16::from_be_bytes(len_bytes) as usize;

    let mut data = vec![0u8; len];
    if let Err(e) = reader.read_exact(&mut data) {
        return short_read_as_none(e);
    }
    Ok(Some(data))
}

fn short_read_as_none(e: std::io::Error) -> Result<Option<Vec<u8>>> {
    if e.kind() == ErrorKind::UnexpectedEof {
        Ok(None)
    } else {
        Err(e.into())
    }
}
