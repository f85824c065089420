// File: crates/fiolat-plot/src/lib.rs
// Summary: Line chart rendering for latency series; consumes the PlotSource contract only.

pub mod axis;
pub mod chart;
pub mod grid;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use types::Insets;
