//! Reporter
//!
//! Renders a table's contents and its collision rate as plain text.
//!
//! ## Output Format
//! ```text
//! 15143: |Alice, 12345| ->
//! 48530: |Carol, 555| -> |Carol, 556| ->
//! ########################
//! Collision Rate = 50.00%
//! ```
//! Every entry is followed by `" -> "`, so bucket lines end with a space.

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;
use crate::table::HashTable;

/// Line printed between the bucket dump and the statistics
pub const SEPARATOR: &str = "########################";

/// Write every non-empty bucket followed by the collision rate.
///
/// An empty table reports a rate of `0.00%`.
pub fn write_report<V, H, W>(table: &HashTable<V, H>, out: &mut W) -> Result<()>
where
    V: Display,
    W: Write + ?Sized,
{
    for bucket in table.buckets() {
        write!(out, "{}: ", bucket.index())?;
        for entry in bucket.entries() {
            write!(out, "{} -> ", entry.value())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(
        out,
        "Collision Rate = {:.2}%",
        table.collision_rate().unwrap_or(0.0)
    )?;
    Ok(())
}
