// File: crates/fiolat-core/src/progress.rs
// Summary: Progress sinks driven by the loader while it scans a log.

use std::io::Write;
use tracing::debug;

/// Receives periodic notifications from a long-running scan.
pub trait Progress {
    /// `lines` is the running count of physical lines read so far.
    fn advance(&mut self, lines: usize);
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn advance(&mut self, lines: usize) { (**self).advance(lines) }
}

/// Discards all progress notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&mut self, _lines: usize) {}
}

/// Reports progress as debug-level tracing events.
#[derive(Clone, Debug, Default)]
pub struct LogProgress {
    name: String,
}

impl LogProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Progress for LogProgress {
    fn advance(&mut self, lines: usize) {
        debug!(file = %self.name, lines, "parsing");
    }
}

/// Writes one `.` per notification, the way operators are used to seeing it.
pub struct DotProgress<W: Write> {
    out: W,
    dots: usize,
}

impl<W: Write> DotProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, dots: 0 }
    }

    pub fn dots(&self) -> usize { self.dots }

    pub fn into_inner(self) -> W { self.out }
}

impl DotProgress<std::io::Stderr> {
    pub fn stderr() -> Self { Self::new(std::io::stderr()) }
}

impl<W: Write> Progress for DotProgress<W> {
    fn advance(&mut self, _lines: usize) {
        // Progress output is best effort.
        let _ = self.out.write_all(b".");
        let _ = self.out.flush();
        self.dots += 1;
    }
}
