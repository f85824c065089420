// File: crates/fiolat/src/output.rs
// Summary: Output naming and CSV serialization of a series.

use anyhow::{Context, Result};
use fiolat_core::Series;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `<out_dir>/<input stem>.<ext>`, e.g. `target/out/job1_lat.1.csv`.
pub fn out_path(out_dir: &Path, input: &Path, ext: &str) -> PathBuf {
    let stem = input
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.strip_suffix(".log").unwrap_or(s))
        .filter(|s| !s.is_empty())
        .unwrap_or("series");
    out_dir.join(format!("{stem}.{ext}"))
}

/// Write `time,value` rows with a header.
pub fn write_csv<W: Write>(series: &Series, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["time", "value"])?;
    for s in series {
        wtr.write_record([s.time().to_string(), s.value().to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(series: &Series, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(series, std::io::BufWriter::new(file))
}
