//! Derive per-call averages and summary totals from an aggregation table.

use super::table::{AggregationTable, Totals};
use crate::parser::ResultRecord;
use log::debug;

/// Average time per call for one table entry
///
/// **Public** - falls back to the run time itself when no calls were recorded
pub fn avg_time_per_call(totals: &Totals) -> f64 {
    if totals.num_calls > 0 {
        totals.run_time / totals.num_calls as f64
    } else {
        totals.run_time
    }
}

/// Finalize every table entry into a result record
///
/// **Public** - main entry point for metrics calculation
///
/// # Returns
/// One record per table key, in table iteration order (unsorted)
pub fn calculate_results(table: &AggregationTable) -> Vec<ResultRecord> {
    debug!("Calculating averages for {} entries", table.len());

    table
        .iter()
        .map(|(name, totals)| ResultRecord {
            name: name.clone(),
            run_time: totals.run_time,
            num_calls: totals.num_calls,
            avg_time_per_call: avg_time_per_call(totals),
        })
        .collect()
}

/// Totals over a whole result table
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableTotals {
    /// Number of result rows
    pub entries: usize,

    /// Sum of run time over all rows
    pub run_time: f64,

    /// Sum of calls over all rows
    pub num_calls: u64,
}

impl TableTotals {
    /// Get human-readable summary
    ///
    /// **Public** - for status logging
    pub fn summary(&self) -> String {
        format!(
            "Evaluators: {} | Total run time: {:.6} s | Total calls: {}",
            self.entries, self.run_time, self.num_calls
        )
    }
}

/// Sum run time and calls across a result table
///
/// **Public** - regrouping never changes these sums; calls saturate at u64::MAX
pub fn summarize(results: &[ResultRecord]) -> TableTotals {
    TableTotals {
        entries: results.len(),
        run_time: results.iter().map(|r| r.run_time).sum(),
        num_calls: results
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.num_calls)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_time_per_call() {
        assert_eq!(avg_time_per_call(&Totals::new(1.5, 10)), 0.15);
        assert_eq!(avg_time_per_call(&Totals::new(5.0, 10)), 0.5);
    }

    #[test]
    fn test_avg_without_calls_falls_back_to_run_time() {
        assert_eq!(avg_time_per_call(&Totals::new(2.0, 0)), 2.0);
        assert_eq!(avg_time_per_call(&Totals::new(0.0, 0)), 0.0);
    }

    #[test]
    fn test_calculate_results() {
        let mut table = AggregationTable::new();
        table.insert("Foo".to_string(), Totals::new(5.0, 10));
        table.insert("Idle".to_string(), Totals::new(2.0, 0));

        let results = calculate_results(&table);

        assert_eq!(results.len(), 2);
        let foo = results.iter().find(|r| r.name == "Foo").unwrap();
        assert_eq!(foo.avg_time_per_call, 0.5);
        let idle = results.iter().find(|r| r.name == "Idle").unwrap();
        assert_eq!(idle.avg_time_per_call, 2.0);
    }

    #[test]
    fn test_summarize() {
        let mut table = AggregationTable::new();
        table.insert("A".to_string(), Totals::new(1.0, 3));
        table.insert("B".to_string(), Totals::new(2.5, 7));

        let totals = summarize(&calculate_results(&table));

        assert_eq!(totals.entries, 2);
        assert_eq!(totals.run_time, 3.5);
        assert_eq!(totals.num_calls, 10);
        assert!(totals.summary().contains("Total calls: 10"));
    }
}
