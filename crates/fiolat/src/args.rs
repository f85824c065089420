// File: crates/fiolat/src/args.rs
// Summary: Command-line flags.

use clap::Parser;
use fiolat_core::MAX_SANE_VALUE;
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "target/out";

#[derive(Parser, Debug)]
#[command(author, version, about = "Load fio latency logs and reduce them for plotting", long_about = None)]
pub struct Args {
    /// fio log files (`time, value, reserved, block` per line)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Average each log down to this many buckets
    #[arg(long, short = 'b')]
    pub buckets: Option<usize>,

    /// Directory for CSV and PNG outputs
    #[arg(long, short = 'o', default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Write <stem>.csv for every input
    #[arg(long)]
    pub csv: bool,

    /// Render <stem>.png for every input
    #[arg(long)]
    pub png: bool,

    /// Write CSV to stdout instead of a file (one header per input)
    #[arg(long, conflicts_with = "csv")]
    pub stdout: bool,

    /// Values above this are treated as corrupt data
    #[arg(long, default_value_t = MAX_SANE_VALUE)]
    pub max_value: f64,

    /// Print progress dots on stderr while parsing
    #[arg(long)]
    pub dots: bool,

    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
