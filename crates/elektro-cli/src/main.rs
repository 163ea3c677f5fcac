//! Elektro CLI
//!
//! Command-line interface for the Elektro model-configuration tooling

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "elektro")]
#[command(about = "Elektro - Neuron model configuration tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the canonical content digest of a config file
    Hash(commands::hash::HashArgs),
    /// Compare two config files
    Diff(commands::diff::DiffArgs),
    /// Aggregate a numeric field over a records file
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash(args) => commands::hash::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
