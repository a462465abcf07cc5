//! # Phonebook
//!
//! An in-memory name → number directory built on a fixed-size hash table:
//! - FNV hashing of text keys into 32 bits
//! - Separate chaining with newest-first chains
//! - Insert, lookup, delete and ordered traversal
//! - Collision-rate diagnostics over the bucket distribution
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Input file / reader                     │
//! │                    ("name - number" lines)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                          Loader                             │
//! │               (parse, trim, skip malformed)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ insert(name, Record)
//!                       ▼
//!               ┌───────────────┐        ┌─────────────┐
//!               │   HashTable   │◀───────│    hash     │
//!               │  (chaining)   │        │   (FNV)     │
//!               └───────┬───────┘        └─────────────┘
//!                       │ buckets() / collision_rate()
//!                       ▼
//!               ┌───────────────┐
//!               │   Reporter    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hash;
pub mod table;
pub mod record;
pub mod loader;
pub mod report;
pub mod phonebook;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PhonebookError, Result};
pub use config::Config;
pub use table::HashTable;
pub use record::Record;
pub use phonebook::Phonebook;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the phonebook crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
