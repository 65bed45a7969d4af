//! Tests for the Index
//!
//! These tests verify:
//! - Point operations: get/put/delete
//! - Overwrite semantics of put
//! - No-op delete on absent keys

use logkv::index::Index;

// =============================================================================
// Basic Operations
// =============================================================================

#[test]
fn test_get_absent_key() {
    let index = Index::new();
    assert_eq!(index.get("missing"), None);
}

#[test]
fn test_put_then_get() {
    let mut index = Index::new();
    index.put("key1".to_string(), 0);
    index.put("key2".to_string(), 42);

    assert_eq!(index.get("key1"), Some(0));
    assert_eq!(index.get("key2"), Some(42));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_put_overwrites_existing() {
    let mut index = Index::new();
    index.put("key".to_string(), 10);
    index.put("key".to_string(), 99);

    assert_eq!(index.get("key"), Some(99));
    assert_eq!(index.len(), 1);
}

// =============================================================================
// Delete Semantics
// =============================================================================

#[test]
fn test_delete_present_key() {
    let mut index = Index::new();
    index.put("key".to_string(), 7);

    assert!(index.delete("key"));
    assert_eq!(index.get("key"), None);
    assert!(index.is_empty());
}

#[test]
fn test_delete_absent_key_is_noop() {
    let mut index = Index::new();
    index.put("other".to_string(), 1);

    assert!(!index.delete("missing"));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_delete_then_put_again() {
    let mut index = Index::new();
    index.put("key".to_string(), 5);
    index.delete("key");
    index.put("key".to_string(), 50);

    assert_eq!(index.get("key"), Some(50));
}

// =============================================================================
// Housekeeping
// =============================================================================

#[test]
fn test_contains() {
    let mut index = Index::new();
    index.put("key".to_string(), 0);

    assert!(index.contains("key"));
    assert!(!index.contains("missing"));
}

#[test]
fn test_clear() {
    let mut index = Index::new();
    for i in 0..10 {
        index.put(format!("key{}", i), i);
    }
    assert_eq!(index.len(), 10);

    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.get("key0"), None);
}
