//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use symdb_core::{DEFAULT_DATABASE_FILE, DEFAULT_ROOT};

#[derive(Parser)]
#[command(name = "symdb")]
#[command(about = "Symbol and struct offset database builder", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory tree for info.txt files and write the merged database
    Aggregate {
        /// Directory searched recursively for info.txt
        #[arg(short, long, env = "SYMDB_ROOT", default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Database file to write
        #[arg(short, long, env = "SYMDB_OUTPUT", default_value = DEFAULT_DATABASE_FILE)]
        output: PathBuf,

        /// Do not echo the database to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a single info.txt and print the record
    Parse {
        file: PathBuf,

        /// Print the record back in info.txt form instead of JSON
        #[arg(long)]
        normalize: bool,
    },

    /// Show the hex values of a symbol or struct member across version prefixes
    Lookup {
        name: String,

        /// Database file to read
        #[arg(short, long, env = "SYMDB_OUTPUT", default_value = DEFAULT_DATABASE_FILE)]
        db: PathBuf,

        /// Print hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every version prefix in a database
    Summary {
        /// Database file to read
        #[arg(short, long, env = "SYMDB_OUTPUT", default_value = DEFAULT_DATABASE_FILE)]
        db: PathBuf,
    },
}
