//! Key hashing
//!
//! 32-bit FNV hashing over the raw bytes of a key. Each byte is XORed into
//! the state before the state is multiplied by the prime; all arithmetic
//! wraps at 32 bits. Published test-vector tables list this ordering under
//! FNV-1a, so that is where to cross-check outputs.

/// FNV 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV 32-bit prime
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `bytes` with the FNV 32-bit scheme
#[inline]
pub fn fnv1(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Maps a text key to the 32-bit value used for bucket selection.
///
/// Implementations must be deterministic: the same key always produces the
/// same hash for the lifetime of a table, otherwise lookups miss.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u32;
}

/// Default hasher for [`HashTable`](crate::table::HashTable)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1;

impl KeyHasher for Fnv1 {
    #[inline]
    fn hash_key(&self, key: &str) -> u32 {
        fnv1(key.as_bytes())
    }
}
