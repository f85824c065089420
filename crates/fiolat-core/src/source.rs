// File: crates/fiolat-core/src/source.rs
// Summary: Read-only access contract handed to charting collaborators.

use crate::series::Series;

/// Renderer-agnostic view over an ordered (x, y) data set.
///
/// Implementations never mutate the underlying data and may be queried
/// repeatedly and in any order. Indices must lie in `0..len()`; out-of-range
/// access panics like slice indexing.
pub trait PlotSource {
    fn len(&self) -> usize;
    fn xy(&self, i: usize) -> (f64, f64);
    fn value(&self, i: usize) -> f64;
    fn values(&self) -> Vec<f64>;

    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl PlotSource for Series {
    fn len(&self) -> usize { Series::len(self) }

    fn xy(&self, i: usize) -> (f64, f64) {
        let s = self.samples()[i];
        (s.time(), s.value())
    }

    fn value(&self, i: usize) -> f64 { self.samples()[i].value() }

    fn values(&self) -> Vec<f64> {
        self.iter().map(|s| s.value()).collect()
    }
}

impl<T: PlotSource + ?Sized> PlotSource for &T {
    fn len(&self) -> usize { (**self).len() }
    fn xy(&self, i: usize) -> (f64, f64) { (**self).xy(i) }
    fn value(&self, i: usize) -> f64 { (**self).value(i) }
    fn values(&self) -> Vec<f64> { (**self).values() }
}
