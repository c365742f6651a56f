use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("symdb=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Aggregate {
            root,
            output,
            quiet,
        } => commands::aggregate::run(&root, &output, quiet),
        Command::Parse { file, normalize } => commands::parse::run(&file, normalize),
        Command::Lookup { name, db, json } => commands::lookup::run(&name, &db, json),
        Command::Summary { db } => commands::summary::run(&db),
    }
}
