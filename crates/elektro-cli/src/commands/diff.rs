//! Config diff command

use clap::Args;
use elektro_core::ops::Store;
use elektro_core_types::RequestContext;
use elektro_engine::commands::engine_query::{
    apply_engine_query, EngineQuery, EngineQueryResult,
};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the previous config JSON file
    pub a: std::path::PathBuf,

    /// Path to the next config JSON file
    pub b: std::path::PathBuf,

    /// Emit structured change records as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let a: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&args.a)?)?;
    let b: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&args.b)?)?;

    // Delegate to the engine's read-only query surface (canonical path)
    let store = Store::new();
    let ctx = RequestContext::new();
    let result = apply_engine_query(EngineQuery::ConfigDiff { a, b }, &store, &ctx)?;

    match result {
        EngineQueryResult::ConfigDiff(diff) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&diff.changes)?);
            } else {
                print!("{}", diff.human_summary);
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}
