//! Summary command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use symdb_core::{EntrySummary, load_database};

/// Format one summary line without colors
pub fn format_summary(summary: &EntrySummary) -> String {
    let release = summary
        .release
        .map(|release| format!(" [{}]", release.codename))
        .unwrap_or_default();

    format!(
        "{}{}\t{}\t{} builds\t{} symbols\t{} members",
        summary.version_prefix,
        release,
        summary.os,
        summary.builds,
        summary.symbols,
        summary.structs
    )
}

/// Run the summary command
pub fn run(db: &Path) -> Result<()> {
    let database = load_database(db)
        .with_context(|| format!("Failed to load database from {}", db.display()))?;

    for summary in database.summary() {
        if summary.release.is_some() {
            println!("{}", format_summary(&summary).green());
        } else {
            println!("{}", format_summary(&summary));
        }
    }

    println!(
        "{}",
        format!("{} version prefixes", database.len()).dimmed()
    );

    Ok(())
}
