//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;

// Re-export main command functions
pub use models::ReportArgs;
pub use report::{build_report, execute_report, read_input, validate_args, Report};
