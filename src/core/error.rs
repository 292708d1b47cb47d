//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Unknown color name passed on the command line.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("unknown color `{0}` (try `term-sketch colors`)")]
    UnknownName(String),
}

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance must be a finite, non-negative number, got {0}")]
    InvalidTolerance(f64),
    #[error("sector shift must be finite, got {0}")]
    InvalidShift(f64),
    #[error("frame delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelay(f64),
}

/// Top-level error type bubbled up by public APIs.
///
/// Only hard failures land here. Missing input, bad tokens and empty charts
/// degrade gracefully and never produce a `SketchError`.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SketchError>;
