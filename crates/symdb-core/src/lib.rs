//! # symdb-core
//!
//! Core library for building a symbol/struct offset database from `info.txt` dumps.
//!
//! This crate provides:
//! - `info.txt` record parsing (header, symbol lines, struct member lines)
//! - Recursive aggregation of records by version prefix
//! - JSON persistence and lookup of the aggregated database
//! - Known OS release codenames for summaries

pub mod aggregate;
pub mod database;
pub mod error;
pub mod record;
pub mod release;

pub use aggregate::{
    AggregateStats, AggregatedEntry, Aggregator, DEFAULT_ROOT, HexSet, INFO_FILE_NAME,
    ScanConfig, ScanConfigBuilder, aggregate,
};
pub use database::{
    DEFAULT_DATABASE_FILE, EntrySummary, LookupHit, SymbolDatabase, load_database, save_database,
};
pub use error::{Error, Result};
pub use record::{
    HEADER_SEPARATOR, Header, LineKind, ParsedRecord, SYMBOL_LINE_COUNT, SkippedLine,
    parse_header, parse_info, parse_info_file,
};
pub use release::{KNOWN_RELEASES, Release, known_release};
