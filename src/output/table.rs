//! Sort result records and render them as a fixed-width text table.
//!
//! ```text
//!   Average Time          Total    Total  Evaluator
//!       per Call       Run Time    Calls  Name
//! -------------- -------------- --------  ----------------------------------------
//!   1.500000e-01   1.500000e+00       10  Foo
//! ```

use crate::parser::ResultRecord;
use crate::utils::config::{
    MIN_CALLS_COLUMN_WIDTH, SCIENTIFIC_PRECISION, TABLE_WIDTH, TIME_COLUMN_WIDTH,
};
use std::cmp::Ordering;

/// Metric the table is ranked by (always largest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    AvgTimePerCall,
    RunTime,
    NumCalls,
}

impl SortKey {
    /// Descending comparison of two records on this key
    ///
    /// **Public** - used by sort_results
    pub fn compare(&self, a: &ResultRecord, b: &ResultRecord) -> Ordering {
        match self {
            SortKey::AvgTimePerCall => b.avg_time_per_call.total_cmp(&a.avg_time_per_call),
            SortKey::RunTime => b.run_time.total_cmp(&a.run_time),
            SortKey::NumCalls => b.num_calls.cmp(&a.num_calls),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::AvgTimePerCall => "average time per call",
            SortKey::RunTime => "total run time",
            SortKey::NumCalls => "number of calls",
        }
    }
}

/// Sort records in place, largest key first
///
/// **Public** - equal keys keep their incoming relative order
pub fn sort_results(results: &mut [ResultRecord], key: SortKey) {
    results.sort_by(|a, b| key.compare(a, b));
}

/// Width of the calls column
///
/// **Public** - at least MIN_CALLS_COLUMN_WIDTH, wider for very large counts
pub fn calls_column_width(results: &[ResultRecord]) -> usize {
    let max_calls = results.iter().map(|r| r.num_calls).max().unwrap_or(0);
    decimal_digits(max_calls).max(MIN_CALLS_COLUMN_WIDTH)
}

fn decimal_digits(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Format a value like C's `%.6e`: `1.500000e-01`
///
/// **Public** - Rust's `{:e}` omits the exponent sign and padding
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf / NaN
        None => formatted,
    }
}

/// Render already-sorted records as a text table
///
/// **Public** - main entry point for formatting
///
/// # Returns
/// Header, rule and one line per record, each newline-terminated
pub fn render_table(results: &[ResultRecord]) -> String {
    let tw = TIME_COLUMN_WIDTH;
    let cw = calls_column_width(results);

    let mut lines = Vec::with_capacity(results.len() + 3);

    lines.push(format!(
        "{:>tw$} {:>tw$} {:>cw$}  {}",
        "Average Time", "Total", "Total", "Evaluator"
    ));
    lines.push(format!(
        "{:>tw$} {:>tw$} {:>cw$}  {}",
        "per Call", "Run Time", "Calls", "Name"
    ));

    let numeric_width = tw + 1 + tw + 1 + cw + 2;
    let name_width = TABLE_WIDTH
        .saturating_sub(numeric_width)
        .max("Evaluator".len());
    lines.push(format!(
        "{} {} {}  {}",
        "-".repeat(tw),
        "-".repeat(tw),
        "-".repeat(cw),
        "-".repeat(name_width)
    ));

    for record in results {
        lines.push(format!(
            "{:>tw$} {:>tw$} {:>cw$}  {}",
            format_scientific(record.avg_time_per_call, SCIENTIFIC_PRECISION),
            format_scientific(record.run_time, SCIENTIFIC_PRECISION),
            record.num_calls,
            record.name
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
