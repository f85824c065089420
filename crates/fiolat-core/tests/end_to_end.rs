// File: crates/fiolat-core/tests/end_to_end.rs
// Purpose: Load -> reduce -> read back through the plot contract.

use fiolat_core::{load_reader, LoadOptions, NoProgress, PlotSource, ReduceError, Sample, Series};
use std::io::Cursor;

#[test]
fn two_fio_lines_reduce_to_their_mean() {
    let opts = LoadOptions { max_value: f64::INFINITY, ..LoadOptions::default() };
    let text = "3, 205274611861, 0, 4096\n16, 205274624691, 0, 4096\n";
    let series = load_reader(Cursor::new(text), "fio_lat.1.log", &opts, NoProgress).expect("load");
    assert_eq!(series.values(), vec![205274611861.0, 205274624691.0]);

    let reduced = series.reduce(1).expect("reduce");
    assert_eq!(reduced.samples(), &[Sample::new(3.0, 205274618276.0)]);
    // input left as it was
    assert_eq!(series.len(), 2);
}

#[test]
fn reduction_preserves_order_and_window_start_times() {
    let text: String = (1..=10).map(|i| format!("{}, {}, 0, 4096\n", i * 100, i)).collect();
    let series = load_reader(Cursor::new(text), "mem", &LoadOptions::default(), NoProgress).expect("load");
    let reduced = series.reduce(3).expect("reduce");

    assert_eq!(PlotSource::len(&reduced), 3);
    assert_eq!(reduced.xy(0), (100.0, 2.0));
    assert_eq!(reduced.xy(1), (400.0, 5.0));
    assert_eq!(reduced.xy(2), (700.0, 8.0));
}

#[test]
fn reduction_beyond_length_fails_without_output() {
    let series = Series::from(vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(
        series.reduce(3).unwrap_err(),
        ReduceError::TooManyBuckets { requested: 3, available: 2 }
    );
}

#[test]
fn crate_error_wraps_both_stages() {
    fn run() -> fiolat_core::Result<Series> {
        let series = load_reader(Cursor::new("1, 1, 0, 4096\n"), "mem", &LoadOptions::default(), NoProgress)?;
        Ok(series.reduce(2)?)
    }
    assert!(matches!(run(), Err(fiolat_core::Error::Reduce(ReduceError::TooManyBuckets { .. }))));
}
