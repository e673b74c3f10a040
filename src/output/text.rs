//! Text table output writer.
//!
//! Writes the rendered table either to a file or to standard output.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a rendered table to a file, or to stdout when no path is given
///
/// **Public** - main entry point for table output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_table(table: &str, output_path: Option<&Path>) -> Result<(), OutputError> {
    match output_path {
        Some(path) => write_table_file(table, path),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(table.as_bytes())?;
            handle.flush()?;
            Ok(())
        }
    }
}

/// Write a rendered table to a file
///
/// **Public** - creates missing parent directories
pub fn write_table_file(table: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing table to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(table.as_bytes())?;
    writer.flush()?;

    info!("Table written successfully ({} bytes)", table.len());

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - exposed for callers that want to fail before running the pipeline
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
