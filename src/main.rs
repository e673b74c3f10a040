//! Phalanx Timings CLI
//!
//! Ranks Phalanx evaluators by the timings recorded in a test log's
//! TimeMonitor report.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;

use phalanx_timings::aggregator::AggregateOptions;
use phalanx_timings::commands::{execute_report, validate_args, ReportArgs};
use phalanx_timings::output::SortKey;
use phalanx_timings::utils::config::DEFAULT_INPUT_FILE;
use phalanx_timings::utils::error::ReportError;

/// Phalanx Timings - summarize evaluator timings from a TimeMonitor report
#[derive(Parser, Debug)]
#[command(name = "phalanx-timings")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Test log containing the TimeMonitor results
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print progress messages to stderr
    #[arg(short, long)]
    status: bool,

    /// Sort by total run time
    #[arg(short = 'r', long, conflicts_with = "num_calls")]
    run_time: bool,

    /// Sort by number of calls
    #[arg(short = 'c', long)]
    num_calls: bool,

    /// Aggregate evaluators by base name (drop ": qualifier")
    #[arg(short, long)]
    names: bool,

    /// Aggregate evaluators by evaluation type (drop "[Tag] ")
    #[arg(short, long)]
    eval_types: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_args(&self) -> ReportArgs {
        let sort_key = if self.run_time {
            SortKey::RunTime
        } else if self.num_calls {
            SortKey::NumCalls
        } else {
            SortKey::AvgTimePerCall
        };

        ReportArgs {
            input: self.input.clone(),
            output: self.output.clone(),
            sort_key,
            aggregate: AggregateOptions {
                by_base_name: self.names,
                by_eval_type: self.eval_types,
            },
        }
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments; clap's own exit code for bad usage is 2, ours is 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // Usage text that cannot be written is an output failure
            if err.print().is_err() {
                return ExitCode::from(4);
            }
            return ExitCode::from(code);
        }
    };

    // Setup logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.status {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = cli.report_args();

    if let Err(err) = validate_args(&args) {
        return fail(&anyhow::Error::from(err));
    }

    match execute_report(&args) {
        Ok(report) => {
            if report.malformed_rows > 0 {
                warn!("{} malformed rows were skipped", report.malformed_rows);
            }
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

/// Report a fatal error with usage guidance
///
/// **Private** - picks the exit code from the underlying ReportError
fn fail(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);
    eprintln!();
    eprintln!("{}", Cli::command().render_usage());
    eprintln!("For more information, try '--help'.");

    let code = err
        .downcast_ref::<ReportError>()
        .map(ReportError::exit_code)
        .unwrap_or(4);

    ExitCode::from(code)
}
