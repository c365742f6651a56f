//! Lookup command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use symdb_core::{LookupHit, load_database};

/// Format one hit as a tab-separated line
pub fn format_hit(hit: &LookupHit) -> String {
    format!(
        "{}\t{}\t{}",
        hit.version_prefix,
        hit.kind,
        hit.values.join(", ")
    )
}

/// Run the lookup command
pub fn run(name: &str, db: &Path, json: bool) -> Result<()> {
    let database = load_database(db)
        .with_context(|| format!("Failed to load database from {}", db.display()))?;

    let hits = database.lookup(name);
    if hits.is_empty() {
        bail!("'{}' not found in {}", name, db.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("{}", name.bold());
    for hit in &hits {
        println!("  {}", format_hit(hit));
    }

    Ok(())
}
