//! `hanoi` - runs both HanoiForge solvers over a list of disk counts.

mod args;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Cursor};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use hanoiforge::{BatchError, BatchSummary, ConfigError, Runner, RunnerConfig};
use thiserror::Error;
use tracing::{error, warn};

use crate::args::Args;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        hanoiforge::console::init_verbose();
    } else {
        hanoiforge::console::init();
    }

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "hanoi failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<BatchSummary, CliError> {
    let runner = Runner::new(load_config(args.config.as_deref())?)?;

    // Open the input before touching the output so a bad input path leaves
    // an earlier report in place.
    let input = open_input(args)?;

    if args.writes_stdout() {
        Ok(runner.run_batch(input, io::stdout().lock())?)
    } else {
        let file = create_output(&args.output)?;
        Ok(runner.run_batch(input, BufWriter::new(file))?)
    }
}

fn open_input(args: &Args) -> Result<Box<dyn BufRead>, CliError> {
    if !args.tokens.is_empty() {
        return Ok(Box::new(Cursor::new(args.tokens.join("\n"))));
    }

    let file = File::open(&args.input).map_err(|source| CliError::Open {
        path: args.input.display().to_string(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

// A missing file means defaults; any other failure is reported.
fn load_config(path: Option<&Path>) -> Result<RunnerConfig, ConfigError> {
    match path {
        Some(path) if path.exists() => RunnerConfig::load(path),
        Some(path) => {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(RunnerConfig::default())
        }
        None => Ok(RunnerConfig::default()),
    }
}

fn create_output(path: &Path) -> Result<File, CliError> {
    let open_err = |source| CliError::Open {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    File::create(path).map_err(open_err)
}

#[cfg(test)]
mod tests;
