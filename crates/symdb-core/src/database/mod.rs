//! The aggregated symbol/struct database.
//!
//! A [`SymbolDatabase`] maps version prefixes to [`AggregatedEntry`] values and
//! serializes as a plain JSON object keyed by prefix:
//!
//! ```text
//! { "10.0.26100": { "builds": [...], "os": "...", "symbols": {...}, "structs": {...} } }
//! ```

mod query;
mod store;

pub use query::*;
pub use store::*;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregatedEntry;
use crate::record::ParsedRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolDatabase {
    entries: BTreeMap<String, AggregatedEntry>,
}

impl SymbolDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a record into the entry for its version prefix
    ///
    /// Returns true if the record created a new entry.
    pub fn merge_record(&mut self, record: ParsedRecord) -> bool {
        match self.entries.entry(record.version_prefix.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(AggregatedEntry::from_record(record));
                true
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().merge(record);
                false
            }
        }
    }

    pub fn get(&self, version_prefix: &str) -> Option<&AggregatedEntry> {
        self.entries.get(version_prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AggregatedEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ParsedRecord> for SymbolDatabase {
    fn from_iter<I: IntoIterator<Item = ParsedRecord>>(iter: I) -> Self {
        let mut database = Self::new();
        for record in iter {
            database.merge_record(record);
        }
        database
    }
}
