use std::path::PathBuf;

/// Solves the Tower of Hanoi recursively and iteratively and compares timings.
#[derive(Debug, clap::Parser)]
#[command(version, name = "hanoi", about)]
pub struct Args {
    /// File with one disk count per line.
    #[arg(long, short, default_value = "input_output/input.txt")]
    pub input: PathBuf,

    /// Report destination, `-` for stdout.
    #[arg(long, short, default_value = "input_output/output.txt")]
    pub output: PathBuf,

    /// Runner configuration (TOML, or YAML by `.yaml`/`.yml` extension).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log each processed token.
    #[arg(long, short)]
    pub verbose: bool,

    /// Disk counts to run instead of reading the input file.
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,
}

impl Args {
    /// Returns true if reports go to stdout.
    pub fn writes_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
