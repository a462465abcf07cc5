//! Separate-chaining hash table
//!
//! Buckets own their chains through boxed links; every mutation is a splice
//! on a single chain.

use crate::config::DEFAULT_TABLE_SIZE;
use crate::error::{PhonebookError, Result};
use crate::hash::{Fnv1, KeyHasher};

use super::entry::{release_chain, Entry, Link};
use super::iter::{Buckets, Chain, Iter};
use super::stats::CollisionStats;

/// Fixed-size hash table keyed by text
///
/// ## Invariants:
/// - Every entry reachable from bucket `i` has `hash(key) % table_size == i`
/// - Chains are acyclic and ordered newest first
/// - `table_size` never changes; there is no rehashing
pub struct HashTable<V, H = Fnv1> {
    /// Chain heads, one per bucket
    buckets: Box<[Link<V>]>,

    /// Number of stored entries across all chains
    len: usize,

    /// Key hashing policy
    hasher: H,
}

impl<V> HashTable<V, Fnv1> {
    /// Create an empty table with `table_size` buckets using FNV hashing
    pub fn new(table_size: usize) -> Result<Self> {
        Self::with_hasher(table_size, Fnv1)
    }
}

impl<V> Default for HashTable<V, Fnv1> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_TABLE_SIZE, Fnv1)
    }
}

impl<V, H> HashTable<V, H> {
    fn from_parts(table_size: usize, hasher: H) -> Self {
        Self {
            buckets: std::iter::repeat_with(|| None).take(table_size).collect(),
            len: 0,
            hasher,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Stored entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Release every entry, leaving all buckets empty
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            release_chain(bucket.take());
        }
        self.len = 0;
    }

    /// Non-empty buckets in ascending index order
    pub fn buckets(&self) -> Buckets<'_, V> {
        Buckets::new(&self.buckets)
    }

    /// All entries with their bucket index, bucket by bucket, head to tail
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.buckets())
    }

    /// Count single and collided buckets in one pass
    pub fn collision_stats(&self) -> CollisionStats {
        self.buckets()
            .fold(CollisionStats::default(), |mut stats, bucket| {
                let chain_len = bucket.chain_len();
                if chain_len > 1 {
                    stats.collided += 1;
                } else {
                    stats.single += 1;
                }
                stats.longest_chain = stats.longest_chain.max(chain_len);
                stats
            })
    }

    /// Percentage of occupied buckets holding two or more entries.
    ///
    /// `None` for a table with no occupied bucket.
    pub fn collision_rate(&self) -> Option<f64> {
        self.collision_stats().rate()
    }

    fn chain(&self, index: usize) -> Chain<'_, V> {
        Chain::new(self.buckets[index].as_deref())
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Create an empty table with `table_size` buckets and a custom hasher
    pub fn with_hasher(table_size: usize, hasher: H) -> Result<Self> {
        if table_size == 0 {
            return Err(PhonebookError::Config(
                "a hash table needs at least one bucket".to_string(),
            ));
        }
        Ok(Self::from_parts(table_size, hasher))
    }

    /// Bucket that `key` maps to
    #[inline]
    pub fn bucket_index(&self, key: &str) -> usize {
        self.hasher.hash_key(key) as usize % self.buckets.len()
    }

    /// Prepend a new entry to the chain of `key`'s bucket.
    ///
    /// Existing entries with the same key are kept; the new one shadows them.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> &Entry<V> {
        let key = key.into();
        let index = self.bucket_index(&key);
        tracing::trace!("Inserting {:?} into bucket {}", key, index);

        self.len += 1;
        let head = &mut self.buckets[index];
        let next = head.take();
        &**head.insert(Box::new(Entry::new(key, value, next)))
    }

    /// Find the most recent entry stored under `key`.
    ///
    /// Only `key`'s own bucket is scanned. A miss is logged and returned as
    /// [`PhonebookError::KeyNotFound`].
    pub fn lookup(&self, key: &str) -> Result<&Entry<V>> {
        match self.find(key) {
            Some(entry) => Ok(entry),
            None => {
                tracing::warn!("{} not found in the table", key);
                Err(PhonebookError::KeyNotFound(key.to_string()))
            }
        }
    }

    /// Payload of the most recent entry under `key`, without logging misses
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Unlink and release the most recent entry stored under `key`.
    ///
    /// The bucket head only changes when the head itself is removed;
    /// otherwise the predecessor is relinked past the removed entry.
    pub fn delete(&mut self, key: &str) -> Result<V> {
        let index = self.bucket_index(key);

        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|entry| entry.key != key) {
            if let Some(entry) = link {
                link = &mut entry.next;
            }
        }

        let Some(removed) = link.take() else {
            tracing::warn!("{} not found in the table", key);
            return Err(PhonebookError::KeyNotFound(key.to_string()));
        };
        let Entry { value, next, .. } = *removed;
        *link = next;

        self.len -= 1;
        tracing::trace!("Deleted {:?} from bucket {}", key, index);
        Ok(value)
    }

    fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.chain(self.bucket_index(key))
            .find(|entry| entry.key == key)
    }
}

impl<V, H> Drop for HashTable<V, H> {
    fn drop(&mut self) {
        self.clear();
    }
}
