//! Parse command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use symdb_core::parse_info_file;
use tracing::warn;

/// Run the parse command
pub fn run(file: &Path, normalize: bool) -> Result<()> {
    let record =
        parse_info_file(file).with_context(|| format!("Failed to parse {}", file.display()))?;

    if normalize {
        if !record.is_renderable() {
            warn!(
                "{} has {} symbol values; members will not re-parse as members",
                file.display(),
                record.symbol_value_count()
            );
        }
        print!("{}", record.to_info_string());
    } else {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    if !record.skipped.is_empty() {
        eprintln!("{} malformed lines skipped", record.skipped.len());
    }

    Ok(())
}
