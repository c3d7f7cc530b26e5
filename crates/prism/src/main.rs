//! `prism`: batch surface distances from a file or stdin.
//!
//! Exit status is 0 when every case was solved, 1 when any case was
//! rejected or the batch failed, and 2 on invalid arguments.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prism::batch::{BatchError, BatchReport, BatchRunner};

mod cli;

use cli::Cli;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PRISM_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) if report.all_solved() => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::info!(
                rejected = report.rejected.len(),
                expected = report.expected,
                "batch finished with rejected queries"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("prism: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<BatchReport, BatchError> {
    let runner = BatchRunner::new(cli.batch_config())?;
    let output = BufWriter::new(io::stdout().lock());
    match cli.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {e}", path.display()))
            })?;
            runner.run(BufReader::new(file), output)
        }
        None => runner.run(io::stdin().lock(), output),
    }
}
