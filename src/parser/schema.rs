//! Record types flowing through the report pipeline.

/// One rank's `(time, calls)` contribution on a timer row
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParsedPair {
    /// Cumulative time in seconds
    pub time: f64,

    /// Number of calls
    pub calls: u64,
}

impl ParsedPair {
    pub fn new(time: f64, calls: u64) -> Self {
        Self { time, calls }
    }

    /// Sum of calls over several ranks, None if it does not fit in a u64
    pub fn total_calls(pairs: &[ParsedPair]) -> Option<u64> {
        pairs
            .iter()
            .try_fold(0u64, |total, pair| total.checked_add(pair.calls))
    }
}

/// A named evaluator with its summed run time and call count
///
/// **Public** - produced by the row parser, consumed by the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorRecord {
    /// Component name, ordinal and namespace prefixes already removed
    pub name: String,

    /// Total run time in seconds
    pub run_time: f64,

    /// Total number of calls
    pub num_calls: u64,
}

impl EvaluatorRecord {
    /// Create a new record
    ///
    /// **Public** - constructor
    pub fn new(name: impl Into<String>, run_time: f64, num_calls: u64) -> Self {
        Self {
            name: name.into(),
            run_time,
            num_calls,
        }
    }

    /// Fold several ranks' pairs into one record (their total work)
    ///
    /// **Public** - used for multi-process rows
    ///
    /// Returns None when the summed call count overflows.
    pub fn from_pairs(name: impl Into<String>, pairs: &[ParsedPair]) -> Option<Self> {
        let run_time = pairs.iter().map(|p| p.time).sum();
        let num_calls = ParsedPair::total_calls(pairs)?;
        Some(Self::new(name, run_time, num_calls))
    }
}

/// Aggregated record with its derived average
///
/// **Public** - output of the metric calculator, input of the formatter
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub name: String,
    pub run_time: f64,
    pub num_calls: u64,

    /// `run_time / num_calls`, or `run_time` when there were no calls
    pub avg_time_per_call: f64,
}
