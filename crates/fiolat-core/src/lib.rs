// File: crates/fiolat-core/src/lib.rs
// Summary: Core library entry point; exports the latency log loader, bucket reducer and plot contract.

pub mod series;
pub mod source;
pub mod error;
pub mod progress;
pub mod loader;
pub mod downsample;

pub use series::{Sample, Series, Summary};
pub use source::PlotSource;
pub use error::{Error, LoadError, ReduceError, Result};
pub use progress::{DotProgress, LogProgress, NoProgress, Progress};
pub use loader::{load, load_reader, LoadOptions, MAX_SANE_VALUE, PROGRESS_INTERVAL};
pub use downsample::reduce;
