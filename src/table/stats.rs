//! Bucket distribution statistics

/// Occupancy summary of a table's buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Buckets holding two or more entries
    pub collided: usize,

    /// Buckets holding exactly one entry
    pub single: usize,

    /// Length of the longest chain (0 for an empty table)
    pub longest_chain: usize,
}

impl CollisionStats {
    /// Number of non-empty buckets
    pub fn occupied(&self) -> usize {
        self.collided + self.single
    }

    /// Percentage of occupied buckets that hold more than one entry.
    ///
    /// Returns `None` when no bucket is occupied, since the ratio is undefined.
    pub fn rate(&self) -> Option<f64> {
        let occupied = self.occupied();
        if occupied == 0 {
            return None;
        }
        Some(self.collided as f64 / occupied as f64 * 100.0)
    }
}
