use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HexSet;
use crate::record::ParsedRecord;

/// Everything known about one version prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    /// Build numbers in the order their files were merged, duplicates kept
    pub builds: Vec<String>,
    /// OS text of the first file that contributed to this entry
    pub os: String,
    pub symbols: BTreeMap<String, HexSet>,
    pub structs: BTreeMap<String, HexSet>,
}

impl AggregatedEntry {
    /// Start a new entry from the first record seen for its prefix
    pub fn from_record(record: ParsedRecord) -> Self {
        let mut entry = Self {
            os: record.os.clone(),
            ..Default::default()
        };
        entry.merge(record);
        entry
    }

    /// Fold another record with the same prefix into this entry
    ///
    /// The entry keeps its original `os`.
    pub fn merge(&mut self, record: ParsedRecord) {
        self.builds.push(record.build);
        merge_values(&mut self.symbols, record.symbols);
        merge_values(&mut self.structs, record.structs);
    }

    pub fn symbol_value_count(&self) -> usize {
        self.symbols.values().map(HexSet::len).sum()
    }

    pub fn struct_value_count(&self) -> usize {
        self.structs.values().map(HexSet::len).sum()
    }
}

fn merge_values(target: &mut BTreeMap<String, HexSet>, source: BTreeMap<String, Vec<String>>) {
    for (name, values) in source {
        target.entry(name).or_default().union(values);
    }
}
