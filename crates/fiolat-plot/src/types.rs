// File: crates/fiolat-plot/src/types.rs
// Summary: Surface size defaults and plot margins.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Extra left room for nine-digit latency labels.
        Self::new(96, 24, 40, 56)
    }
}
