// File: crates/fiolat/src/main.rs
// Summary: Loads fio latency logs, optionally reduces them to N buckets and writes CSV/PNG outputs.

mod args;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use fiolat_core::{load, DotProgress, LoadOptions, LogProgress, Series};
use fiolat_plot::{Chart, RenderOptions};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Any error reaching this point is fatal for the whole run.
    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let opts = LoadOptions { max_value: args.max_value, ..LoadOptions::default() };

    for path in &args.files {
        let series = load_one(path, &opts, args.dots)?;
        if series.is_empty() {
            warn!(file = %path.display(), "no samples loaded, skipping");
            continue;
        }

        let series = match args.buckets {
            Some(buckets) => series
                .reduce(buckets)
                .with_context(|| format!("reducing '{}'", path.display()))?,
            None => series,
        };

        if let Some(sum) = series.summary() {
            info!(
                file = %path.display(),
                points = sum.count,
                min = sum.min,
                max = sum.max,
                mean = sum.mean,
                span = sum.last_time - sum.first_time,
                "series ready"
            );
        }

        write_outputs(args, path, &series)?;
    }
    Ok(())
}

fn load_one(path: &Path, opts: &LoadOptions, dots: bool) -> Result<Series> {
    let series = if dots {
        let s = load(path, opts, DotProgress::stderr());
        eprintln!();
        s
    } else {
        load(path, opts, LogProgress::new(path.display().to_string()))
    };
    Ok(series?)
}

fn write_outputs(args: &Args, input: &Path, series: &Series) -> Result<()> {
    if args.stdout {
        output::write_csv(series, std::io::stdout().lock())?;
    } else if args.csv {
        let out = output::out_path(&args.out_dir, input, "csv");
        output::write_csv_file(series, &out)?;
        info!("Wrote {}", out.display());
    }

    if args.png {
        let mut chart = Chart::new(input.display().to_string());
        chart.autoscale(series, 0.05);
        let out = output::out_path(&args.out_dir, input, "png");
        chart
            .render_to_png(series, &RenderOptions::default(), &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        info!("Wrote {}", out.display());
    }
    Ok(())
}
