// File: crates/fiolat-core/src/error.rs
// Summary: Typed errors for loading and reducing latency series.
//
// None of these are recovered from inside the core. The caller decides
// whether a failure ends the process.

use std::num::ParseFloatError;
use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Reduce(#[from] ReduceError),
}

/// Fatal conditions met while scanning a log.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read from '{source_name}' failed at line {line}: {source}")]
    Read {
        source_name: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing time failed in '{source_name}' at line {line}: {source}")]
    ParseTime {
        source_name: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("parsing value failed in '{source_name}' at line {line}: {source}")]
    ParseValue {
        source_name: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} out of range in '{source_name}' at line {line}: '{raw}'")]
    OutOfRange {
        source_name: String,
        line: usize,
        field: &'static str,
        raw: String,
    },

    #[error("invalid value in '{source_name}' at line {line}, too big! raw: '{raw}', parsed: {value} (max {max})")]
    ValueTooLarge {
        source_name: String,
        line: usize,
        raw: String,
        value: f64,
        max: f64,
    },
}

impl LoadError {
    /// 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            LoadError::Read { line, .. }
            | LoadError::ParseTime { line, .. }
            | LoadError::ParseValue { line, .. }
            | LoadError::OutOfRange { line, .. }
            | LoadError::ValueTooLarge { line, .. } => *line,
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            LoadError::Read { source_name, .. }
            | LoadError::ParseTime { source_name, .. }
            | LoadError::ParseValue { source_name, .. }
            | LoadError::OutOfRange { source_name, .. }
            | LoadError::ValueTooLarge { source_name, .. } => source_name,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    #[error("cannot reduce {available} samples into {requested} buckets")]
    TooManyBuckets { requested: usize, available: usize },

    #[error("bucket count must be at least 1")]
    ZeroBuckets,
}
