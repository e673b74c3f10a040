//! Ranking and rendering of the result table.
//!
//! This module handles:
//! - Sorting result records by the selected metric
//! - Fixed-width text table rendering
//! - Writing the table to a file or stdout

pub mod table;
pub mod text;

// Re-export main functions
pub use table::{calls_column_width, format_scientific, render_table, sort_results, SortKey};
pub use text::{validate_path, write_table, write_table_file};
