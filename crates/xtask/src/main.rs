//! Development tasks for the item effect engine
//!
//! This binary provides content tooling using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Simulate, ValidateCatalog};

/// Development tasks for the item effect engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Content tools for item effects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check an item catalog and print a per-item summary
    ValidateCatalog(ValidateCatalog),

    /// Run one item's effects against a context fixture
    Simulate(Simulate),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ValidateCatalog(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
