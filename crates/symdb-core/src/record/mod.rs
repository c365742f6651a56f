//! `info.txt` record parsing.
//!
//! Each `info.txt` describes a single build:
//!
//! - **Header**: `<os> - <version-prefix>.<build>`
//! - **Symbols**: the first 7 non-blank lines after the header, `<hex> <name>`
//! - **Members**: every later line, `<hex> <type tokens...> <member>`
//!
//! Hex values are kept as opaque strings and never parsed as numbers.

mod parser;
mod render;

pub use parser::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// One parsed `info.txt` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub version_prefix: String,
    pub build: String,
    pub os: String,
    /// Symbol name -> hex values in file order
    pub symbols: BTreeMap<String, Vec<String>>,
    /// Member name -> hex values in file order
    pub structs: BTreeMap<String, Vec<String>>,
    /// Content lines dropped because they did not match their expected shape
    #[serde(skip)]
    pub skipped: Vec<SkippedLine>,
}

impl ParsedRecord {
    /// Full version token as it appeared on the header line
    pub fn version(&self) -> String {
        format!("{}.{}", self.version_prefix, self.build)
    }

    /// Total number of symbol values in this record
    pub fn symbol_value_count(&self) -> usize {
        self.symbols.values().map(Vec::len).sum()
    }

    /// Total number of member values in this record
    pub fn struct_value_count(&self) -> usize {
        self.structs.values().map(Vec::len).sum()
    }
}

/// Which section a content line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Display)]
pub enum LineKind {
    #[strum(serialize = "symbol")]
    Symbol,
    #[strum(serialize = "struct/member")]
    Struct,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A content line that was skipped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub kind: LineKind,
    pub line: String,
}

impl SkippedLine {
    pub fn new(kind: LineKind, line: &str) -> Self {
        Self {
            kind,
            line: line.to_string(),
        }
    }

    /// Convert into the matching line-level error
    pub fn to_error(&self) -> crate::Error {
        match self.kind {
            LineKind::Symbol => crate::Error::MalformedSymbolLine(self.line.clone()),
            LineKind::Struct => crate::Error::MalformedStructLine(self.line.clone()),
        }
    }
}
