use std::path::PathBuf;
use crate::aggregator::AggregateOptions;
use crate::output::SortKey;
use crate::utils::config::DEFAULT_INPUT_FILE;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Test log holding the TimeMonitor report
    pub input: PathBuf,

    /// Output path for the table (None = stdout)
    pub output: Option<PathBuf>,

    /// Metric the table is ranked by
    pub sort_key: SortKey,

    /// Optional base-name / evaluation-type merges
    pub aggregate: AggregateOptions,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: None,
            sort_key: SortKey::default(),
            aggregate: AggregateOptions::default(),
        }
    }
}
