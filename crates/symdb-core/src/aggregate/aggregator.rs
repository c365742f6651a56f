use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::database::SymbolDatabase;
use crate::error::Result;
use crate::record::{ParsedRecord, parse_info_file};

/// File name searched for under the scan root
pub const INFO_FILE_NAME: &str = "info.txt";

/// Default scan root
pub const DEFAULT_ROOT: &str = "files";

/// Configuration for a scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory searched recursively
    pub root: PathBuf,
    /// Exact file name to parse
    pub file_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            file_name: INFO_FILE_NAME.to_string(),
        }
    }
}

impl ScanConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    root: Option<PathBuf>,
}

impl ScanConfigBuilder {
    /// Set the scan root
    pub fn root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            root: self.root.unwrap_or(default.root),
            file_name: default.file_name,
        }
    }
}

/// Counters for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub files_seen: usize,
    pub files_parsed: usize,
    pub files_skipped: usize,
    pub lines_skipped: usize,
}

/// Walks a directory tree and folds every `info.txt` into a [`SymbolDatabase`]
#[derive(Debug, Default)]
pub struct Aggregator {
    config: ScanConfig,
    database: SymbolDatabase,
    stats: AggregateStats,
}

impl Aggregator {
    /// Create an aggregator over `root` with default settings
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_config(ScanConfig::builder().root(root).build())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            database: SymbolDatabase::new(),
            stats: AggregateStats::default(),
        }
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn database(&self) -> &SymbolDatabase {
        &self.database
    }

    pub fn into_database(self) -> SymbolDatabase {
        self.database
    }

    /// Find every matching file under the root, sorted by name at each level
    pub fn discover(&self) -> Vec<PathBuf> {
        let file_name = self.config.file_name.as_str();

        WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            // Symlinked files count; `path().is_file()` follows the link
            .filter(|entry| entry.file_name() == file_name && entry.path().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Parse and merge every discovered file
    pub fn scan(&mut self) -> &SymbolDatabase {
        info!("Starting search in: {}", self.config.root.display());

        for path in self.discover() {
            // Failures are already logged and counted
            let _ = self.add_file(&path);
        }

        info!(
            "Processed {} files: {} parsed, {} skipped, {} lines skipped, {} version prefixes",
            self.stats.files_seen,
            self.stats.files_parsed,
            self.stats.files_skipped,
            self.stats.lines_skipped,
            self.database.len()
        );

        &self.database
    }

    /// Parse one file and merge it; a failure skips only this file
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        self.stats.files_seen += 1;
        debug!("Processing file: {}", path.display());

        match parse_info_file(path) {
            Ok(record) => {
                self.stats.lines_skipped += record.skipped.len();
                self.add_record(record);
                Ok(())
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                self.stats.files_skipped += 1;
                Err(e)
            }
        }
    }

    /// Merge an already parsed record
    pub fn add_record(&mut self, record: ParsedRecord) {
        self.stats.files_parsed += 1;
        debug!("  -> Version Prefix: {}", record.version_prefix);
        self.database.merge_record(record);
    }
}

/// Aggregate every `info.txt` under `root`
pub fn aggregate<P: AsRef<Path>>(root: P) -> SymbolDatabase {
    let mut aggregator = Aggregator::new(root.as_ref());
    aggregator.scan();
    aggregator.into_database()
}
