//! Aggregate command: scan, merge, save, echo.

use std::path::Path;

use anyhow::{Context, Result};
use symdb_core::{AggregateStats, Aggregator, SymbolDatabase, save_database};

/// Scan `root` and return the database with run counters
pub fn build(root: &Path) -> (SymbolDatabase, AggregateStats) {
    let mut aggregator = Aggregator::new(root);
    aggregator.scan();
    let stats = aggregator.stats();
    (aggregator.into_database(), stats)
}

/// Run the aggregate command
pub fn run(root: &Path, output: &Path, quiet: bool) -> Result<()> {
    let (database, stats) = build(root);

    save_database(output, &database)
        .with_context(|| format!("Failed to write database to {}", output.display()))?;

    if !quiet {
        println!("{}", database.to_json_pretty()?);
    }

    eprintln!(
        "{} of {} files merged into {} version prefixes -> {}",
        stats.files_parsed,
        stats.files_seen,
        database.len(),
        output.display()
    );

    Ok(())
}
