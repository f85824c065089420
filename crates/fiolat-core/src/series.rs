// File: crates/fiolat-core/src/series.rs
// Summary: Sample and Series model for (time, value) latency data.
// Notes:
// - A Series keeps samples in the order they were read; it is never re-sorted.
// - Reduction always produces a new Series, the input is left untouched.

use crate::error::ReduceError;

/// One (time, value) observation from a latency log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    time: f64,  // offset from the start of the run
    value: f64, // latency or throughput reading
}

impl Sample {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    #[inline]
    pub const fn time(&self) -> f64 { self.time }

    #[inline]
    pub const fn value(&self) -> f64 { self.value }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Self {
        Self::new(time, value)
    }
}

/// Basic statistics over a non-empty series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub first_time: f64,
    pub last_time: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Ordered sequence of samples in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn first(&self) -> Option<&Sample> { self.samples.first() }

    pub fn last(&self) -> Option<&Sample> { self.samples.last() }

    /// Downsample into `buckets` windows by arithmetic mean.
    /// See [`crate::downsample::reduce`] for the exact window rules.
    pub fn reduce(&self, buckets: usize) -> Result<Series, ReduceError> {
        crate::downsample::reduce(&self.samples, buckets).map(Series::from_samples)
    }

    /// Min/max/mean of the values plus the covered time span; `None` when empty.
    pub fn summary(&self) -> Option<Summary> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0f64;
        for s in &self.samples {
            min = min.min(s.value);
            max = max.max(s.value);
            total += s.value;
        }
        Some(Summary {
            count: self.samples.len(),
            first_time: first.time,
            last_time: last.time,
            min,
            max,
            mean: total / self.samples.len() as f64,
        })
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(data: Vec<(f64, f64)>) -> Self {
        data.into_iter().map(Sample::from).collect()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
