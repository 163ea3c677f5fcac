//! Canonical digest command

use clap::Args;
use elektro_core::canonical::{config_digest, CanonicalOptions};

#[derive(Debug, Args)]
pub struct HashArgs {
    /// Path to the config JSON file
    pub config: std::path::PathBuf,

    /// Decimal places floats are rounded to before hashing
    #[arg(long, default_value_t = 5)]
    pub precision: usize,
}

pub fn execute(args: HashArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.config)?;
    let config: serde_json::Value = serde_json::from_str(&text)?;

    let digest = config_digest(&config, &CanonicalOptions::with_precision(args.precision))?;
    println!("{}", digest);

    Ok(())
}
