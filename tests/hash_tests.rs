//! Hash Function Tests
//!
//! Tests verify:
//! - Reference vectors
//! - Determinism
//! - Byte-order sensitivity
//! - The `KeyHasher` policy matches the raw function

use phonebook::hash::{fnv1, Fnv1, KeyHasher, FNV_OFFSET_BASIS, FNV_PRIME};

// =============================================================================
// Reference Vector Tests
// =============================================================================

#[test]
fn test_empty_key_is_offset_basis() {
    assert_eq!(fnv1(b""), 2_166_136_261);
    assert_eq!(fnv1(b""), FNV_OFFSET_BASIS);
}

#[test]
fn test_single_byte_is_one_xor_multiply_step() {
    let expected = (FNV_OFFSET_BASIS ^ u32::from(b'a')).wrapping_mul(FNV_PRIME);
    assert_eq!(fnv1(b"a"), expected);
    assert_eq!(fnv1(b"a"), 0xe40c_292c);
}

#[test]
fn test_published_vectors() {
    assert_eq!(fnv1(b"foobar"), 0xbf9c_f968);
    assert_eq!(fnv1(b"Alice"), 752_715_143);
    assert_eq!(fnv1(b"Bob"), 3_955_990_900);
    assert_eq!(fnv1(b"Carol"), 255_748_530);
}

// =============================================================================
// Property Tests
// =============================================================================

#[test]
fn test_hash_is_deterministic() {
    let keys = ["", "a", "Alice", "a much longer key with spaces", "ünïcödé"];
    for key in keys {
        assert_eq!(fnv1(key.as_bytes()), fnv1(key.as_bytes()));
    }
}

#[test]
fn test_hash_depends_on_byte_order() {
    assert_ne!(fnv1(b"ab"), fnv1(b"ba"));
}

#[test]
fn test_hash_wraps_on_long_input() {
    // Must not overflow-panic in debug builds
    let long = vec![0xffu8; 10_000];
    let _ = fnv1(&long);
}

#[test]
fn test_key_hasher_matches_fnv1() {
    for key in ["", "Bob", "Carol", "0123456789"] {
        assert_eq!(Fnv1.hash_key(key), fnv1(key.as_bytes()));
    }
}
