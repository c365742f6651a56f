//! Folding parsed records into a per-version-prefix database.
//!
//! The [`Aggregator`] walks a directory tree, parses every `info.txt` it finds and
//! merges each record into the [`AggregatedEntry`] for its version prefix:
//!
//! - The first file for a prefix fixes the entry's `os`
//! - Every file appends its build number to `builds`, duplicates included
//! - Symbol and member hex values are unioned, keeping first-seen order
//!
//! Files that cannot be read or parsed are logged and skipped; a run never fails.

mod aggregator;
mod entry;
mod hex_set;

pub use aggregator::*;
pub use entry::*;
pub use hex_set::*;
