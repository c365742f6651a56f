use serde::Serialize;

use super::SymbolDatabase;
use crate::record::LineKind;
use crate::release::{Release, known_release};

/// A name found in one version prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupHit<'a> {
    pub version_prefix: &'a str,
    #[serde(serialize_with = "serialize_kind")]
    pub kind: LineKind,
    pub values: &'a [String],
}

fn serialize_kind<S: serde::Serializer>(kind: &LineKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_str())
}

/// Per-prefix overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary<'a> {
    pub version_prefix: &'a str,
    pub os: &'a str,
    pub builds: usize,
    pub symbols: usize,
    pub structs: usize,
    pub release: Option<&'static Release>,
}

impl SymbolDatabase {
    /// Every prefix where `name` is a symbol or a struct member
    pub fn lookup(&self, name: &str) -> Vec<LookupHit<'_>> {
        let mut hits = Vec::new();
        for (prefix, entry) in self.iter() {
            if let Some(values) = entry.symbols.get(name) {
                hits.push(LookupHit {
                    version_prefix: prefix,
                    kind: LineKind::Symbol,
                    values: values.as_slice(),
                });
            }
            if let Some(values) = entry.structs.get(name) {
                hits.push(LookupHit {
                    version_prefix: prefix,
                    kind: LineKind::Struct,
                    values: values.as_slice(),
                });
            }
        }
        hits
    }

    pub fn summary(&self) -> Vec<EntrySummary<'_>> {
        self.iter()
            .map(|(prefix, entry)| EntrySummary {
                version_prefix: prefix,
                os: &entry.os,
                builds: entry.builds.len(),
                symbols: entry.symbols.len(),
                structs: entry.structs.len(),
                release: known_release(prefix),
            })
            .collect()
    }
}
