//! Table Module
//!
//! Fixed-size hash table with separate chaining.
//!
//! ## Responsibilities
//! - Map text keys to owned payloads via `hash(key) % table_size`
//! - Keep colliding entries in a per-bucket chain, newest first
//! - Deterministic traversal (bucket index ascending, head to tail)
//! - Report how evenly keys spread across buckets
//!
//! ## Layout
//! ```text
//!  buckets
//! ┌───────┐
//! │   0   │──▶ None
//! ├───────┤    ┌───────────┐    ┌───────────┐
//! │   1   │──▶ │ key/value │──▶ │ key/value │──▶ None
//! ├───────┤    └───────────┘    └───────────┘
//! │  ...  │
//! ├───────┤    ┌───────────┐
//! │ N - 1 │──▶ │ key/value │──▶ None
//! └───────┘    └───────────┘
//! ```
//!
//! The bucket count never changes after construction. Duplicate keys are
//! allowed and chain separately; lookups see the most recent one first.

mod chained;
mod entry;
mod iter;
mod stats;

pub use chained::HashTable;
pub use entry::Entry;
pub use iter::{Bucket, Buckets, Chain, Iter};
pub use stats::CollisionStats;
