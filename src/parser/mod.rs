//! Timing report parsing and record definitions.
//!
//! This module handles:
//! - Isolating the TimeMonitor section of a test log
//! - Classifying evaluator rows (single-process or 4-rank)
//! - Normalising evaluator name decorations

pub mod extract;
pub mod names;
pub mod row;
pub mod schema;

// Re-export main types
pub use extract::{extract_timing_rows, ExtractedSection};
pub use names::{base_name, component_name, strip_eval_type, strip_ordinal_prefix};
pub use row::{RowParser, RowShape};
pub use schema::{EvaluatorRecord, ParsedPair, ResultRecord};
