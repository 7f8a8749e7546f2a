use std::path::PathBuf;

use clap::Parser;

/// cpdiag: stress-test a solution and collect every input that trips an assertion
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of inputs to check (default: from config)
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Seed for the input generator (default: from config)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Where to write failing inputs as JSON lines (default: from config)
    /// Example: ./failures.jsonl
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Config file to use instead of $CPDIAG_CONFIG or ./cpdiag.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this many failing inputs
    #[arg(long)]
    pub stop_after: Option<usize>,

    /// Never color diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Check the broken solution instead, to watch failures being collected
    #[arg(long)]
    pub broken: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
