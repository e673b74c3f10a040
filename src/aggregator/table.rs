//! Merge evaluator records into an aggregation table.
//!
//! Every stage is a pure function from one table to a fresh one:
//!
//! ```text
//! rows ──> Stage A (exact name) ──> Stage B (base name)? ──> Stage C (eval type)?
//! ```
//!
//! Stage B re-keys `"Foo: q1"` to `"Foo"`; Stage C re-keys `"[Residual] X"`
//! to `"X"`. B always runs before C when both are enabled.

use crate::parser::names::{base_name, strip_eval_type};
use crate::parser::{EvaluatorRecord, RowShape};
use crate::utils::error::RowError;
use log::debug;
use std::collections::BTreeMap;

/// Summed run time and calls for one table key
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub run_time: f64,
    pub num_calls: u64,
}

impl Totals {
    pub fn new(run_time: f64, num_calls: u64) -> Self {
        Self {
            run_time,
            num_calls,
        }
    }

    /// Call counts saturate at u64::MAX instead of wrapping
    fn add(&mut self, other: Totals) {
        self.run_time += other.run_time;
        self.num_calls = self.num_calls.saturating_add(other.num_calls);
    }
}

/// Name (at the active granularity) to summed totals
pub type AggregationTable = BTreeMap<String, Totals>;

/// Optional coarser merges applied after the exact-name merge
///
/// **Public** - built from CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Stage B: collapse `"Base: Qualifier"` into `"Base"`
    pub by_base_name: bool,

    /// Stage C: collapse `"[Tag] Rest"` into `"Rest"`
    pub by_eval_type: bool,
}

/// Records recovered from classified rows
#[derive(Debug, Clone, Default)]
pub struct RowCollection {
    pub records: Vec<EvaluatorRecord>,

    /// Rows that matched neither shape
    pub malformed: Vec<RowError>,
}

/// Turn classified rows into records
///
/// **Public** - entry point between parser and aggregator
///
/// A multi-process row's rank pairs are summed into one record here, so
/// the table only ever sees each row's total work.
pub fn collect_records(shapes: Vec<RowShape>) -> RowCollection {
    let mut collection = RowCollection::default();

    for shape in shapes {
        match shape {
            RowShape::SingleProcess { name, pair } => {
                collection
                    .records
                    .push(EvaluatorRecord::new(name, pair.time, pair.calls));
            }
            RowShape::MultiProcess { name, pairs } => {
                match EvaluatorRecord::from_pairs(name.as_str(), &pairs) {
                    Some(record) => collection.records.push(record),
                    None => {
                        let err = RowError::Malformed(name);
                        debug!("Skipping row: {} (rank calls overflow)", err);
                        collection.malformed.push(err);
                    }
                }
            }
            RowShape::Unrecognized(err) => {
                debug!("Skipping row: {}", err);
                collection.malformed.push(err);
            }
        }
    }

    debug!(
        "Collected {} records, skipped {} malformed rows",
        collection.records.len(),
        collection.malformed.len()
    );

    collection
}

/// Stage A: sum records sharing an identical name
///
/// **Public** - always applied
pub fn aggregate_by_name<'a, I>(records: I) -> AggregationTable
where
    I: IntoIterator<Item = &'a EvaluatorRecord>,
{
    let mut table = AggregationTable::new();

    for record in records {
        table
            .entry(record.name.clone())
            .or_default()
            .add(Totals::new(record.run_time, record.num_calls));
    }

    table
}

/// Re-key a table and sum entries that collapse onto the same key
///
/// **Public** - building block for every coarser stage
///
/// The input table is consumed and a fresh one returned.
pub fn merge<F>(table: AggregationTable, key_fn: F) -> AggregationTable
where
    F: Fn(&str) -> &str,
{
    let mut merged = AggregationTable::new();

    for (name, totals) in table {
        let key = key_fn(&name);
        match merged.get_mut(key) {
            Some(existing) => existing.add(totals),
            None => {
                merged.insert(key.to_string(), totals);
            }
        }
    }

    merged
}

/// Run Stage A and whichever of Stage B / Stage C are enabled
///
/// **Public** - main entry point for aggregation
pub fn aggregate(records: &[EvaluatorRecord], options: AggregateOptions) -> AggregationTable {
    let mut table = aggregate_by_name(records);
    debug!("Exact-name merge: {} entries", table.len());

    if options.by_base_name {
        table = merge(table, base_name);
        debug!("Base-name merge: {} entries", table.len());
    }

    if options.by_eval_type {
        table = merge(table, strip_eval_type);
        debug!("Evaluation-type merge: {} entries", table.len());
    }

    table
}
