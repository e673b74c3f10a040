//! Isolate the TimeMonitor section of a test log.
//!
//! A Teuchos timing report looks roughly like:
//!
//! ```text
//! ============================================================
//!                  TimeMonitor results over 4 processors
//! Timer Name                         Global time (num calls)
//! ------------------------------------------------------------
//! Phalanx: Evaluator 3: Foo    1.0 (2)   2.0 (3)   1.5 (1)   0.5 (4)
//! Belos: Operation Op*x        0.3 (12)
//! ============================================================
//! ```
//!
//! Only the evaluator rows survive extraction.

use crate::utils::config::{
    COMPONENT_PREFIX, RANK_ZERO_LINE_PREFIX, TIMER_NAME_HEADER, TIME_MONITOR_TAG,
    TIMING_SECTION_MARKER,
};
use crate::utils::error::ExtractError;
use log::debug;

/// Rows retained from the timing section
///
/// **Public** - returned from extract_timing_rows
#[derive(Debug, Clone, Default)]
pub struct ExtractedSection<'a> {
    /// Evaluator rows, trimmed, in log order
    pub rows: Vec<&'a str>,

    /// Number of lines in the section span (marker and closing rule included)
    pub span_lines: usize,
}

/// Extract evaluator rows from the full text of a log
///
/// **Public** - main entry point for extraction
///
/// # Errors
/// * `ExtractError::NoTimingSection` - the marker never occurs in the text
pub fn extract_timing_rows(text: &str) -> Result<ExtractedSection<'_>, ExtractError> {
    if !text.contains(TIMING_SECTION_MARKER) {
        return Err(ExtractError::NoTimingSection);
    }

    let lines: Vec<&str> = text.lines().map(strip_rank_prefix).collect();

    let start = lines
        .iter()
        .position(|line| line.contains(TIMING_SECTION_MARKER))
        .ok_or(ExtractError::NoTimingSection)?;

    // Closing rule is inclusive; a report cut short runs to end of input
    let end = lines[start + 1..]
        .iter()
        .position(|line| is_closing_rule(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len() - 1);

    let span = &lines[start..=end];
    let rows: Vec<&str> = span.iter().copied().filter_map(retain_row).collect();

    debug!(
        "Timing section spans lines {}..={} ({} lines), {} evaluator rows kept",
        start + 1,
        end + 1,
        span.len(),
        rows.len()
    );

    Ok(ExtractedSection {
        rows,
        span_lines: span.len(),
    })
}

/// Remove the rank-0 stream decoration from the start of a line
///
/// **Public** - total; lines without the decoration pass through
pub fn strip_rank_prefix(line: &str) -> &str {
    line.strip_prefix(RANK_ZERO_LINE_PREFIX).unwrap_or(line)
}

/// Line made only of two or more `=`
fn is_closing_rule(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2 && line.bytes().all(|b| b == b'=')
}

/// Line made only of `-` or only of `=`
fn is_rule(line: &str) -> bool {
    !line.is_empty() && (line.bytes().all(|b| b == b'-') || line.bytes().all(|b| b == b'='))
}

/// Keep a span line only if it is an evaluator row
///
/// **Private** - filter for extract_timing_rows
fn retain_row(line: &str) -> Option<&str> {
    let trimmed = line.trim();

    if trimmed.is_empty()
        || trimmed.contains(TIME_MONITOR_TAG)
        || trimmed.contains(TIMER_NAME_HEADER)
        || is_rule(trimmed)
        || !trimmed.starts_with(COMPONENT_PREFIX)
    {
        return None;
    }

    Some(trimmed)
}
