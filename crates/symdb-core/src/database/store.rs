use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use super::SymbolDatabase;
use crate::error::{Error, Result};

/// Default output file for a run
pub const DEFAULT_DATABASE_FILE: &str = "symbols.json";

/// Indentation used for the written database
const JSON_INDENT: &[u8] = b"    ";

impl SymbolDatabase {
    /// Serialize as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        self.serialize(&mut serializer)?;

        String::from_utf8(buf)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Parse a database previously written by [`SymbolDatabase::save`]
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Load a database from a JSON file
pub fn load_database<P: AsRef<Path>>(path: P) -> Result<SymbolDatabase> {
    let content = fs::read_to_string(&path)?;
    SymbolDatabase::from_json(&content)
}

/// Save a database to a JSON file
pub fn save_database<P: AsRef<Path>>(path: P, database: &SymbolDatabase) -> Result<()> {
    let content = database.to_json_pretty()?;
    fs::write(&path, content)?;
    info!(
        "Saved {} version prefixes to {}",
        database.len(),
        path.as_ref().display()
    );
    Ok(())
}
