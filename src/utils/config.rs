//! Configuration and constants for the report pipeline.

// Markers that bound the timing section of a test log
pub const TIMING_SECTION_MARKER: &str = "TimeMonitor results";
pub const TIMER_NAME_HEADER: &str = "Timer Name";
pub const TIME_MONITOR_TAG: &str = "TimeMonitor";

/// Decoration that a parallel run's rank-0 stream prepends to every line
pub const RANK_ZERO_LINE_PREFIX: &str = "p=0 | ";

/// Namespace every evaluator row starts with
pub const COMPONENT_PREFIX: &str = "Phalanx";

/// Bookkeeping prefix in front of an evaluator ordinal ("Phalanx: Evaluator 3: ")
pub const ORDINAL_PREFIX: &str = "Phalanx: Evaluator ";

/// Boundary between a base name and its qualifier
pub const QUALIFIER_SEPARATOR: &str = ": ";

/// Number of (time, calls) groups on a multi-process row
pub const MULTI_PROCESS_RANKS: usize = 4;

/// Log file read when no input is given (CTest's last test log)
pub const DEFAULT_INPUT_FILE: &str = "LastTest.log";

// Table layout
pub const MIN_CALLS_COLUMN_WIDTH: usize = 8;
pub const TIME_COLUMN_WIDTH: usize = 14;
pub const SCIENTIFIC_PRECISION: usize = 6;
pub const TABLE_WIDTH: usize = 80;
