// File: crates/fiolat-core/src/downsample.rs
// Summary: Fixed-window mean downsampling for latency series.

use tracing::debug;

use crate::error::ReduceError;
use crate::series::Sample;

/// Reduce `data` to roughly `buckets` points by averaging fixed-size windows.
///
/// The window size is `data.len() / buckets` (integer division). Each output
/// sample takes the time of the first sample in its window and the mean of the
/// window's values. Samples left over after the last full window are dropped,
/// so uneven divisions can yield more buckets than requested, never a short one.
pub fn reduce(data: &[Sample], buckets: usize) -> Result<Vec<Sample>, ReduceError> {
    if buckets == 0 {
        return Err(ReduceError::ZeroBuckets);
    }
    if buckets > data.len() {
        return Err(ReduceError::TooManyBuckets { requested: buckets, available: data.len() });
    }

    let window = data.len() / buckets;
    debug!(samples = data.len(), buckets, window, "bucket size");

    let out = data
        .chunks_exact(window)
        .map(|w| {
            let total: f64 = w.iter().map(Sample::value).sum();
            Sample::new(w[0].time(), total / window as f64)
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(n: usize) -> Vec<Sample> {
        (0..n).map(|i| Sample::new(i as f64 * 10.0, i as f64)).collect()
    }

    #[test]
    fn one_bucket_per_sample_is_identity() {
        let data = samples(7);
        assert_eq!(reduce(&data, 7).expect("reduce"), data);
    }

    #[test]
    fn ten_into_three_drops_the_tail() {
        let out = reduce(&samples(10), 3).expect("reduce");
        assert_eq!(
            out,
            vec![Sample::new(0.0, 1.0), Sample::new(30.0, 4.0), Sample::new(60.0, 7.0)]
        );
    }

    #[test]
    fn uneven_window_can_exceed_request() {
        // 10 / 4 = window 2 -> five full windows.
        let out = reduce(&samples(10), 4).expect("reduce");
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|s| s.value() == s.time() / 10.0 + 0.5));
    }

    #[test]
    fn single_bucket_is_overall_mean() {
        let out = reduce(&samples(4), 1).expect("reduce");
        assert_eq!(out, vec![Sample::new(0.0, 1.5)]);
    }

    #[test]
    fn too_many_buckets_is_rejected() {
        let err = reduce(&samples(3), 4).unwrap_err();
        assert_eq!(err, ReduceError::TooManyBuckets { requested: 4, available: 3 });
        assert!(err.to_string().contains("3 samples into 4 buckets"));
    }

    #[test]
    fn zero_buckets_is_rejected() {
        assert_eq!(reduce(&[], 0).unwrap_err(), ReduceError::ZeroBuckets);
        assert_eq!(reduce(&samples(5), 0).unwrap_err(), ReduceError::ZeroBuckets);
    }
}
