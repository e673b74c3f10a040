//! Aggregation of evaluator records into a ranked result table.
//!
//! This module transforms parsed rows into:
//! - An aggregation table keyed by name (exact, base name, or evaluation type)
//! - Result records with average time per call
//! - Whole-table totals for status reporting

pub mod table;
pub mod metrics;

// Re-export main types and functions
pub use table::{aggregate, aggregate_by_name, collect_records, merge, AggregateOptions, AggregationTable, RowCollection, Totals};
pub use metrics::{avg_time_per_call, calculate_results, summarize, TableTotals};
