//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and reading the input log
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found or not a regular file: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Failed to read input file: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur while isolating the timing section
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No TimeMonitor results section found in input")]
    NoTimingSection,
}

/// A retained row that matches neither row shape
///
/// Never fatal: the row is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Malformed timer row: {0:?}")]
    Malformed(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Fatal errors of a report run, each with its own exit code
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ReportError {
    /// Process exit code for this failure
    ///
    /// **Public** - used by main.rs
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Input(InputError::MissingInputFile(_)) => 2,
            ReportError::Extract(ExtractError::NoTimingSection) => 3,
            ReportError::Input(InputError::ReadFailed(_)) | ReportError::Output(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = ReportError::from(InputError::MissingInputFile(PathBuf::from("nope.log")));
        assert_eq!(missing.exit_code(), 2);

        let no_section = ReportError::from(ExtractError::NoTimingSection);
        assert_eq!(no_section.exit_code(), 3);

        let write = ReportError::from(OutputError::InvalidPath("Path is empty".to_string()));
        assert_eq!(write.exit_code(), 4);
    }

    #[test]
    fn test_missing_input_message_names_path() {
        let err = InputError::MissingInputFile(PathBuf::from("LastTest.log"));
        assert!(err.to_string().contains("LastTest.log"));
    }
}
