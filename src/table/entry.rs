//! Chain nodes

/// Owning link to the next node of a chain
pub(crate) type Link<V> = Option<Box<Entry<V>>>;

/// A single key/payload node in a bucket chain
#[derive(Debug)]
pub struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Link<V>,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: String, value: V, next: Link<V>) -> Self {
        Self { key, value, next }
    }

    /// The key this entry was inserted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The following entry in the same bucket, if any
    pub fn next(&self) -> Option<&Entry<V>> {
        self.next.as_deref()
    }
}

/// Drop a chain node by node so long chains don't recurse through `Box` drops
pub(crate) fn release_chain<V>(mut link: Link<V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}
