//! Time-bucketed series computation.

use crate::stats::summary::{summarize, FieldSummary};
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bucketing granularity for time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "year" => Ok(Granularity::Year),
            other => Err(format!("unknown granularity: {}", other)),
        }
    }
}

/// One bucket of a time series: the truncated timestamp plus the
/// aggregates of every sample falling into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeBucket {
    /// Bucket timestamp (the truncated sample timestamp)
    pub ts: DateTime<Utc>,
    /// Aggregates over the bucket's samples
    pub summary: FieldSummary,
}

/// Truncate a timestamp down to the start of its bucket.
///
/// Weeks start on Monday; quarters on January, April, July and October.
pub fn truncate(ts: DateTime<Utc>, by: Granularity) -> DateTime<Utc> {
    let date = ts.date_naive();
    let (date, hour) = match by {
        Granularity::Hour => (date, ts.hour()),
        Granularity::Day => (date, 0),
        Granularity::Week => {
            let days_from_monday = date.weekday().num_days_from_monday();
            (
                date.checked_sub_days(Days::new(u64::from(days_from_monday)))
                    .unwrap_or(date),
                0,
            )
        }
        Granularity::Month => (
            NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
            0,
        ),
        Granularity::Quarter => {
            let quarter_start_month = (date.month0() / 3) * 3 + 1;
            (
                NaiveDate::from_ymd_opt(date.year(), quarter_start_month, 1).unwrap_or(date),
                0,
            )
        }
        Granularity::Year => (NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date), 0),
    };

    match date.and_hms_opt(hour, 0, 0) {
        Some(naive) => Utc.from_utc_datetime(&naive),
        None => ts,
    }
}

/// Group samples by truncated timestamp and aggregate each bucket.
///
/// Buckets are returned in ascending timestamp order; empty buckets are
/// not materialized.
pub fn bucketed_series(
    samples: &[(DateTime<Utc>, Option<f64>)],
    by: Granularity,
) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<DateTime<Utc>, Vec<Option<f64>>> = BTreeMap::new();
    for (ts, value) in samples {
        buckets.entry(truncate(*ts, by)).or_default().push(*value);
    }

    buckets
        .into_iter()
        .map(|(ts, values)| TimeBucket {
            ts,
            summary: summarize(&values),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_truncate_hour() {
        assert_eq!(
            truncate(ts("2026-03-15T13:45:59Z"), Granularity::Hour),
            ts("2026-03-15T13:00:00Z")
        );
    }

    #[test]
    fn test_truncate_day() {
        assert_eq!(
            truncate(ts("2026-03-15T13:45:59Z"), Granularity::Day),
            ts("2026-03-15T00:00:00Z")
        );
    }

    #[test]
    fn test_truncate_week_to_monday() {
        // 2026-03-15 is a Sunday; the week starts 2026-03-09
        assert_eq!(
            truncate(ts("2026-03-15T13:45:59Z"), Granularity::Week),
            ts("2026-03-09T00:00:00Z")
        );
        // A Monday truncates to itself
        assert_eq!(
            truncate(ts("2026-03-09T08:00:00Z"), Granularity::Week),
            ts("2026-03-09T00:00:00Z")
        );
    }

    #[test]
    fn test_truncate_month() {
        assert_eq!(
            truncate(ts("2026-03-15T13:45:59Z"), Granularity::Month),
            ts("2026-03-01T00:00:00Z")
        );
    }

    #[test]
    fn test_truncate_quarter() {
        assert_eq!(
            truncate(ts("2026-05-20T00:00:00Z"), Granularity::Quarter),
            ts("2026-04-01T00:00:00Z")
        );
        assert_eq!(
            truncate(ts("2026-12-31T23:59:59Z"), Granularity::Quarter),
            ts("2026-10-01T00:00:00Z")
        );
    }

    #[test]
    fn test_truncate_year() {
        assert_eq!(
            truncate(ts("2026-05-20T10:00:00Z"), Granularity::Year),
            ts("2026-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_series_groups_and_orders_buckets() {
        let samples = vec![
            (ts("2026-03-02T10:00:00Z"), Some(1.0)),
            (ts("2026-03-01T09:00:00Z"), Some(2.0)),
            (ts("2026-03-01T15:00:00Z"), Some(4.0)),
            (ts("2026-03-01T23:00:00Z"), None),
        ];
        let series = bucketed_series(&samples, Granularity::Day);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].ts, ts("2026-03-01T00:00:00Z"));
        assert_eq!(series[0].summary.count, 3);
        assert_eq!(series[0].summary.sum, Some(6.0));
        assert_eq!(series[0].summary.avg, Some(3.0));
        assert_eq!(series[1].ts, ts("2026-03-02T00:00:00Z"));
        assert_eq!(series[1].summary.count, 1);
    }

    #[test]
    fn test_granularity_parsing() {
        assert_eq!("week".parse::<Granularity>(), Ok(Granularity::Week));
        assert_eq!("QUARTER".parse::<Granularity>(), Ok(Granularity::Quarter));
        assert!("fortnight".parse::<Granularity>().is_err());
    }
}
