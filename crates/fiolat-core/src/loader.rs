// File: crates/fiolat-core/src/loader.rs
// Summary: Line-oriented parser for fio latency/bandwidth logs.
//
// Record layout, one per line:
//   time, value, reserved, block
//   3, 205274611861, 0, 4096
//   16, 205274624691, 0, 4096
// fio always writes ", " between fields, so lines are split on that exact
// sequence instead of going through a general CSV reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{error, info};

use crate::error::LoadError;
use crate::progress::Progress;
use crate::series::{Sample, Series};

/// Largest value accepted before a log is treated as corrupt.
pub const MAX_SANE_VALUE: f64 = 10_000_000.0;
/// Lines between two progress notifications.
pub const PROGRESS_INTERVAL: usize = 10_000;

const FIELD_DELIMITER: &str = ", ";
const FIELD_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOptions {
    /// Values strictly above this are rejected. `f64::INFINITY` disables the check.
    pub max_value: f64,
    /// Progress cadence in lines; 0 turns notifications off.
    pub progress_every: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { max_value: MAX_SANE_VALUE, progress_every: PROGRESS_INTERVAL }
    }
}

/// Load a log from `path`.
///
/// A file that cannot be opened is logged and yields an empty series; every
/// other failure is returned as a [`LoadError`] and no partial data survives.
pub fn load(
    path: impl AsRef<Path>,
    opts: &LoadOptions,
    progress: impl Progress,
) -> Result<Series, LoadError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            error!(file = %name, %err, "could not open file for read");
            return Ok(Series::new());
        }
    };
    load_reader(BufReader::new(file), &name, opts, progress)
}

/// Parse a log from any buffered reader. `source_name` is used in banners and errors.
pub fn load_reader<R: BufRead>(
    reader: R,
    source_name: &str,
    opts: &LoadOptions,
    mut progress: impl Progress,
) -> Result<Series, LoadError> {
    info!(file = %source_name, "parsing file");

    let mut series = Series::new();
    let mut lno = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Read {
            source_name: source_name.to_string(),
            line: lno + 1,
            source,
        })?;
        lno += 1;

        if opts.progress_every > 0 && lno % opts.progress_every == 0 {
            progress.advance(lno);
        }

        if let Some(sample) = parse_line(&line, lno, source_name, opts)? {
            series.push(sample);
        }
    }

    info!(file = %source_name, lines = lno, samples = series.len(), "done");
    Ok(series)
}

/// `Ok(None)` means the line is incomplete and is skipped.
fn parse_line(
    line: &str,
    lno: usize,
    source_name: &str,
    opts: &LoadOptions,
) -> Result<Option<Sample>, LoadError> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    // Usually a partial record left at the end of the file by an interrupted writer.
    if fields.len() < FIELD_COUNT || fields[0].is_empty() || fields[1].is_empty() {
        return Ok(None);
    }
    let (raw_time, raw_value) = (fields[0], fields[1]);
    // fields[2] is reserved, fields[3] is the block size; neither is needed.

    let time = raw_time.parse::<f64>().map_err(|source| LoadError::ParseTime {
        source_name: source_name.to_string(),
        line: lno,
        source,
    })?;
    check_range(time, raw_time, "time", lno, source_name)?;
    let value = raw_value.parse::<f64>().map_err(|source| LoadError::ParseValue {
        source_name: source_name.to_string(),
        line: lno,
        source,
    })?;
    check_range(value, raw_value, "value", lno, source_name)?;

    if value > opts.max_value {
        return Err(LoadError::ValueTooLarge {
            source_name: source_name.to_string(),
            line: lno,
            raw: raw_value.to_string(),
            value,
            max: opts.max_value,
        });
    }

    Ok(Some(Sample::new(time, value)))
}

/// A finite literal that overflowed to infinity is corrupt; spelled-out `inf`/`infinity` is not.
fn check_range(
    parsed: f64,
    raw: &str,
    field: &'static str,
    lno: usize,
    source_name: &str,
) -> Result<(), LoadError> {
    if parsed.is_infinite() && !is_infinity_literal(raw) {
        return Err(LoadError::OutOfRange {
            source_name: source_name.to_string(),
            line: lno,
            field,
            raw: raw.to_string(),
        });
    }
    Ok(())
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Series, LoadError> {
        load_reader(Cursor::new(text), "mem", &LoadOptions::default(), NoProgress)
    }

    struct Counter(Vec<usize>);

    impl Progress for Counter {
        fn advance(&mut self, lines: usize) { self.0.push(lines); }
    }

    #[test]
    fn parses_well_formed_lines_in_order() {
        let s = parse("3, 205, 0, 4096\n16, 190, 0, 4096\n1, 7, 0, 4096\n").expect("parse");
        assert_eq!(
            s.samples(),
            &[Sample::new(3.0, 205.0), Sample::new(16.0, 190.0), Sample::new(1.0, 7.0)]
        );
    }

    #[test]
    fn skips_short_and_empty_field_lines() {
        let text = "3, 205, 0, 4096\n\n4, 206, 0\n, 5, 0, 4096\n5, , 0, 4096\n6, 207, 0, 4096\n7, 2";
        let s = parse(text).expect("parse");
        assert_eq!(s.samples(), &[Sample::new(3.0, 205.0), Sample::new(6.0, 207.0)]);
    }

    #[test]
    fn plain_commas_are_not_delimiters() {
        // Only ", " splits; this is a single field.
        let s = parse("3,205,0,4096\n").expect("parse");
        assert!(s.is_empty());
    }

    #[test]
    fn trailing_fields_are_not_validated() {
        let s = parse("3, 205, garbage, 4096, extra, stuff\n").expect("parse");
        assert_eq!(s.samples(), &[Sample::new(3.0, 205.0)]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let s = parse("3, 205, 0, 4096\r\n4, 206, 0, 4096\r\n").expect("parse");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn non_numeric_time_is_fatal_with_line_number() {
        let err = parse("3, 205, 0, 4096\nabc, 206, 0, 4096\n").unwrap_err();
        assert!(matches!(err, LoadError::ParseTime { line: 2, .. }), "{err:?}");
        assert_eq!(err.source_name(), "mem");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn overflowing_time_is_fatal_with_line_number() {
        let err = parse("1e400, 5, 0, 4096\n2, 5, 0, 4096\n").unwrap_err();
        match &err {
            LoadError::OutOfRange { line, field, raw, .. } => {
                assert_eq!(*line, 1);
                assert_eq!(*field, "time");
                assert_eq!(raw, "1e400");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn overflowing_negative_value_does_not_slip_past_bound() {
        let err = parse("1, 5, 0, 4096\n2, -1e400, 0, 4096\n").unwrap_err();
        assert!(matches!(err, LoadError::OutOfRange { line: 2, field: "value", .. }), "{err:?}");
    }

    #[test]
    fn spelled_out_infinity_is_accepted() {
        let s = parse("inf, -Infinity, 0, 4096\n").expect("parse");
        assert_eq!(s.samples(), &[Sample::new(f64::INFINITY, f64::NEG_INFINITY)]);
    }

    #[test]
    fn non_numeric_value_is_fatal_with_line_number() {
        let err = parse("\n\n3, 2x5, 0, 4096\n").unwrap_err();
        assert!(matches!(err, LoadError::ParseValue { line: 3, .. }), "{err:?}");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn value_above_bound_is_fatal_even_after_good_lines() {
        let err = parse("1, 10, 0, 4096\n2, 10000001, 0, 4096\n3, 10, 0, 4096\n").unwrap_err();
        match err {
            LoadError::ValueTooLarge { line, raw, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(raw, "10000001");
                assert_eq!(value, 10_000_001.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bound_is_inclusive_and_negatives_pass() {
        let s = parse("1, 10000000, 0, 4096\n2, -5, 0, 4096\n").expect("parse");
        assert_eq!(s.samples(), &[Sample::new(1.0, 10_000_000.0), Sample::new(2.0, -5.0)]);
    }

    #[test]
    fn bound_can_be_lifted() {
        let opts = LoadOptions { max_value: f64::INFINITY, ..LoadOptions::default() };
        let text = "3, 205274611861, 0, 4096\n16, 205274624691, 0, 4096\n";
        let s = load_reader(Cursor::new(text), "fio_lat.log", &opts, NoProgress).expect("parse");
        assert_eq!(
            s.samples(),
            &[Sample::new(3.0, 205274611861.0), Sample::new(16.0, 205274624691.0)]
        );
    }

    #[test]
    fn progress_fires_at_cadence() {
        let text: String = (0..25).map(|i| format!("{i}, 1, 0, 4096\n")).collect();
        let opts = LoadOptions { progress_every: 10, ..LoadOptions::default() };
        let mut counter = Counter(Vec::new());
        let s = load_reader(Cursor::new(text), "mem", &opts, &mut counter).expect("parse");
        assert_eq!(s.len(), 25);
        assert_eq!(counter.0, vec![10, 20]);
    }

    #[test]
    fn default_progress_fires_every_ten_thousand_lines() {
        let text: String = (0..25_000).map(|i| format!("{i}, 1, 0, 4096\n")).collect();
        let mut counter = Counter(Vec::new());
        let s = load_reader(Cursor::new(text), "mem", &LoadOptions::default(), &mut counter).expect("parse");
        assert_eq!(s.len(), 25_000);
        assert_eq!(counter.0, vec![10_000, 20_000]);
    }

    #[test]
    fn progress_can_be_disabled() {
        let opts = LoadOptions { progress_every: 0, ..LoadOptions::default() };
        let mut counter = Counter(Vec::new());
        load_reader(Cursor::new("1, 1, 0, 4096\n"), "mem", &opts, &mut counter).expect("parse");
        assert!(counter.0.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"1, 1, 0, 4096\n\xff\xfe, 1, 0, 4096\n";
        let err = load_reader(bytes, "bin", &LoadOptions::default(), NoProgress).unwrap_err();
        assert!(matches!(err, LoadError::Read { line: 2, .. }), "{err:?}");
        assert_eq!(err.line(), 2);
    }
}
