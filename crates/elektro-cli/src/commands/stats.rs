//! Stats command over a JSON records file.
//!
//! The records file is a JSON array of objects; each record optionally
//! carries a `ts` RFC3339 timestamp (required for `--by`) plus the
//! aggregated field.

use chrono::{DateTime, Utc};
use clap::Args;
use elektro_core::stats::{bucketed_series, summarize, FieldSummary, Granularity};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Path to the records JSON file
    pub records: std::path::PathBuf,

    /// Field to aggregate
    #[arg(long)]
    pub field: String,

    /// Bucket the series by this granularity (hour/day/week/month/quarter/year)
    #[arg(long)]
    pub by: Option<Granularity>,
}

pub fn execute(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&args.records)?)?;

    let mut samples: Vec<(DateTime<Utc>, Option<f64>)> = Vec::new();
    let mut values: Vec<Option<f64>> = Vec::new();

    for record in &records {
        let value = match record.get(&args.field) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(other) => {
                return Err(format!("field '{}' is not numeric: {}", args.field, other).into())
            }
        };
        values.push(value);

        if args.by.is_some() {
            let ts = record
                .get("ts")
                .and_then(|v| v.as_str())
                .ok_or_else(|| format!("record is missing a 'ts' timestamp: {}", record))?;
            samples.push((ts.parse()?, value));
        }
    }

    print_summary(&args.field, &summarize(&values));

    if let Some(by) = args.by {
        println!();
        for bucket in bucketed_series(&samples, by) {
            println!(
                "  {}: count={} sum={}",
                bucket.ts.to_rfc3339(),
                bucket.summary.count,
                render(bucket.summary.sum)
            );
        }
    }

    Ok(())
}

fn print_summary(field: &str, summary: &FieldSummary) {
    println!("Stats for '{}':", field);
    println!("  count: {}", summary.count);
    println!("  distinct: {}", summary.distinct_count);
    println!("  min: {}", render(summary.min));
    println!("  max: {}", render(summary.max));
    println!("  avg: {}", render(summary.avg));
    println!("  sum: {}", render(summary.sum));
}

fn render(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
