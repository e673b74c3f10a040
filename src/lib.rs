//! Phalanx Timings
//!
//! Extracts per-evaluator timings from the Teuchos "TimeMonitor results"
//! section of a test log and produces a ranked summary table.
//!
//! This crate provides the core implementation for the
//! `phalanx-timings` CLI tool.
//!
//! ## Pipeline
//!
//! ```text
//! log text ─> extract ─> classify rows ─> aggregate ─> averages ─> sort/render
//! ```
//!
//! ```bash
//! phalanx-timings -i LastTest.log --names --num-calls
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
