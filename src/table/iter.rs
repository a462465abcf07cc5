//! Traversal
//!
//! All iterators borrow the table and can be recreated at any time; they
//! visit buckets in ascending index order and entries head to tail.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::entry::{Entry, Link};

/// Entries of one bucket, head first
pub struct Chain<'a, V> {
    next: Option<&'a Entry<V>>,
}

impl<'a, V> Chain<'a, V> {
    pub(crate) fn new(head: Option<&'a Entry<V>>) -> Self {
        Self { next: head }
    }
}

impl<V> Clone for Chain<'_, V> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next();
        Some(entry)
    }
}

impl<V> FusedIterator for Chain<'_, V> {}

/// A non-empty bucket
pub struct Bucket<'a, V> {
    index: usize,
    head: &'a Entry<V>,
}

impl<'a, V> Bucket<'a, V> {
    /// Position of this bucket in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// The most recently inserted entry of this bucket
    pub fn head(&self) -> &'a Entry<V> {
        self.head
    }

    pub fn entries(&self) -> Chain<'a, V> {
        Chain::new(Some(self.head))
    }

    /// Number of entries chained in this bucket (always at least 1)
    pub fn chain_len(&self) -> usize {
        self.entries().count()
    }
}

impl<V> Clone for Bucket<'_, V> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            head: self.head,
        }
    }
}

/// Non-empty buckets in ascending index order
pub struct Buckets<'a, V> {
    inner: Enumerate<slice::Iter<'a, Link<V>>>,
}

impl<'a, V> Buckets<'a, V> {
    pub(crate) fn new(buckets: &'a [Link<V>]) -> Self {
        Self {
            inner: buckets.iter().enumerate(),
        }
    }
}

impl<'a, V> Iterator for Buckets<'a, V> {
    type Item = Bucket<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|(index, link)| {
            link.as_deref().map(|head| Bucket { index, head })
        })
    }
}

impl<V> FusedIterator for Buckets<'_, V> {}

/// Every stored entry paired with its bucket index
pub struct Iter<'a, V> {
    buckets: Buckets<'a, V>,
    current: Option<(usize, Chain<'a, V>)>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(buckets: Buckets<'a, V>) -> Self {
        Self {
            buckets,
            current: None,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (usize, &'a Entry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((index, chain)) = self.current.as_mut() {
                if let Some(entry) = chain.next() {
                    return Some((*index, entry));
                }
            }
            let bucket = self.buckets.next()?;
            self.current = Some((bucket.index(), bucket.entries()));
        }
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
