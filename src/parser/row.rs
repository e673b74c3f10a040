//! Classify evaluator rows by their trailing numeric groups.
//!
//! Two shapes are recognised:
//!
//! ```text
//! PhalanxFoo                       1.500000 (10)
//! Phalanx: Evaluator 3: Bar        1.0 (2)   2.0 (3)   1.5 (1)   0.5 (4)
//! ```
//!
//! The first is a single-process run, the second a 4-rank run with one
//! `time (calls)` group per rank.

use super::names::component_name;
use super::schema::ParsedPair;
use crate::utils::config::MULTI_PROCESS_RANKS;
use crate::utils::error::RowError;
use log::debug;
use regex::{Captures, Regex};

/// One `time (calls)` group; captures time and calls
const GROUP: &str = r"(\d*\.?\d+(?:[eE][-+]?\d+)?)\s*\((\d+)\)";

/// Parsed form of one evaluator row
///
/// **Public** - output of RowParser::classify
#[derive(Debug, Clone, PartialEq)]
pub enum RowShape {
    /// Name followed by exactly one group
    SingleProcess { name: String, pair: ParsedPair },

    /// Name followed by one group per rank
    MultiProcess {
        name: String,
        pairs: [ParsedPair; MULTI_PROCESS_RANKS],
    },

    /// Neither shape; the row is skipped
    Unrecognized(RowError),
}

impl RowShape {
    /// Component name, if the row was recognised
    pub fn name(&self) -> Option<&str> {
        match self {
            RowShape::SingleProcess { name, .. } | RowShape::MultiProcess { name, .. } => {
                Some(name.as_str())
            }
            RowShape::Unrecognized(_) => None,
        }
    }
}

/// Row classifier holding the compiled shape patterns
///
/// **Public** - build once per run, then classify every retained row
#[derive(Debug, Clone)]
pub struct RowParser {
    single: Regex,
    multi: Regex,
    group_token: Regex,
}

impl RowParser {
    /// Compile the row patterns
    ///
    /// **Public** - constructor
    pub fn new() -> Result<Self, regex::Error> {
        let multi_groups = vec![GROUP; MULTI_PROCESS_RANKS].join(r"\s+");

        Ok(Self {
            single: Regex::new(&format!(r"^(.*?)\s+{}\s*$", GROUP))?,
            multi: Regex::new(&format!(r"^(.*?)\s+{}\s*$", multi_groups))?,
            group_token: Regex::new(&format!(r"(?:^|\s){}", GROUP))?,
        })
    }

    /// Classify a single retained row
    ///
    /// **Public** - main entry point for row parsing
    ///
    /// The multi-process pattern is tried first. A name that still contains
    /// a numeric group means the row had a group count other than 1 or 4.
    pub fn classify(&self, row: &str) -> RowShape {
        if let Some(caps) = self.multi.captures(row) {
            return self.multi_process(row, &caps);
        }

        if let Some(caps) = self.single.captures(row) {
            return self.single_process(row, &caps);
        }

        debug!("Row matches neither shape: {:?}", row);
        malformed(row)
    }

    /// Classify every row in order
    ///
    /// **Public** - convenience over classify
    pub fn classify_all<'a, I>(&self, rows: I) -> Vec<RowShape>
    where
        I: IntoIterator<Item = &'a str>,
    {
        rows.into_iter().map(|row| self.classify(row)).collect()
    }

    fn single_process(&self, row: &str, caps: &Captures<'_>) -> RowShape {
        let Some(name) = self.extract_name(caps) else {
            return malformed(row);
        };

        match parse_pair(caps, 2) {
            Some(pair) => RowShape::SingleProcess { name, pair },
            None => malformed(row),
        }
    }

    fn multi_process(&self, row: &str, caps: &Captures<'_>) -> RowShape {
        let Some(name) = self.extract_name(caps) else {
            return malformed(row);
        };

        let mut pairs = [ParsedPair::default(); MULTI_PROCESS_RANKS];
        for (rank, slot) in pairs.iter_mut().enumerate() {
            match parse_pair(caps, 2 + rank * 2) {
                Some(pair) => *slot = pair,
                None => return malformed(row),
            }
        }

        // Ranks are summed downstream; a total that overflows is not a usable row
        if ParsedPair::total_calls(&pairs).is_none() {
            debug!("Rank call counts overflow: {:?}", row);
            return malformed(row);
        }

        RowShape::MultiProcess { name, pairs }
    }

    /// Name text before the first group, runs of whitespace collapsed, prefixes stripped
    fn extract_name(&self, caps: &Captures<'_>) -> Option<String> {
        let raw = caps.get(1)?.as_str();

        if self.group_token.is_match(raw) {
            return None;
        }

        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return None;
        }

        Some(component_name(&collapsed).to_string())
    }
}

/// Parse the time/calls capture pair starting at `first`
fn parse_pair(caps: &Captures<'_>, first: usize) -> Option<ParsedPair> {
    let time = caps.get(first)?.as_str().parse::<f64>().ok()?;
    let calls = caps.get(first + 1)?.as_str().parse::<u64>().ok()?;
    Some(ParsedPair::new(time, calls))
}

fn malformed(row: &str) -> RowShape {
    RowShape::Unrecognized(RowError::Malformed(row.to_string()))
}
