//! Report command implementation.
//!
//! The report command:
//! 1. Reads the test log
//! 2. Extracts the TimeMonitor section
//! 3. Classifies evaluator rows
//! 4. Aggregates and computes averages
//! 5. Sorts and writes the table

use super::models::ReportArgs;
use crate::aggregator::{aggregate, calculate_results, collect_records, summarize, TableTotals};
use crate::output::{render_table, sort_results, validate_path, write_table};
use crate::parser::{extract_timing_rows, ResultRecord, RowParser};
use crate::utils::error::{InputError, ReportError};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Outcome of running the pipeline over one log
///
/// **Public** - returned from build_report
#[derive(Debug, Clone)]
pub struct Report {
    /// Result records, already sorted
    pub results: Vec<ResultRecord>,

    /// Rendered text table
    pub table: String,

    /// Number of rows skipped as malformed
    pub malformed_rows: usize,

    /// Sums over the result table
    pub totals: TableTotals,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * `ReportError::Input` - input file missing or unreadable
/// * `ReportError::Extract` - no TimeMonitor section in the log
/// * `ReportError::Output` - table could not be written
pub fn execute_report(args: &ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Step 1/5: Reading {}...", args.input.display());
    let text = read_input(&args.input).map_err(ReportError::from)?;

    let report = build_report(&text, args)?;

    info!("Step 5/5: Writing table...");
    write_table(&report.table, args.output.as_deref())
        .map_err(ReportError::from)
        .context("Failed to write evaluator table")?;

    if let Some(path) = &args.output {
        info!("✓ Table written to: {}", path.display());
    }

    info!("{}", report.totals.summary());
    info!("Report completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Run extraction, parsing, aggregation and formatting over log text
///
/// **Public** - the whole pipeline without any file I/O
pub fn build_report(text: &str, args: &ReportArgs) -> Result<Report> {
    info!("Step 2/5: Extracting TimeMonitor section...");
    let section = extract_timing_rows(text).map_err(ReportError::from)?;
    debug!(
        "Section holds {} lines, {} evaluator rows",
        section.span_lines,
        section.rows.len()
    );

    info!("Step 3/5: Parsing {} evaluator rows...", section.rows.len());
    let parser = RowParser::new().context("Failed to compile row patterns")?;
    let shapes = parser.classify_all(section.rows.iter().copied());
    let collection = collect_records(shapes);

    info!("Step 4/5: Aggregating {} records...", collection.records.len());
    let table = aggregate(&collection.records, args.aggregate);
    let mut results = calculate_results(&table);

    debug!("Sorting {} entries by {}", results.len(), args.sort_key.label());
    sort_results(&mut results, args.sort_key);

    let totals = summarize(&results);
    let rendered = render_table(&results);

    Ok(Report {
        results,
        table: rendered,
        malformed_rows: collection.malformed.len(),
        totals,
    })
}

/// Read the whole input log
///
/// **Public** - fails with MissingInputFile unless the path is a regular file
pub fn read_input(path: &Path) -> Result<String, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInputFile(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    Ok(text)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<(), ReportError> {
    if !args.input.is_file() {
        return Err(InputError::MissingInputFile(args.input.clone()).into());
    }

    if let Some(output) = &args.output {
        validate_path(output)?;
    }

    Ok(())
}
