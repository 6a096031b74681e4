//! Error types for annealing runs.

use thiserror::Error;

/// A precondition on the run configuration was violated.
///
/// Returned before any random draw or objective evaluation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("iterations must be at least 1")]
    InvalidIterations,

    #[error("step_size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("invalid bounds: low ({low}) must be finite and strictly less than high ({high})")]
    InvalidBounds { low: f64, high: f64 },
}

/// Failure of a run whose objective can itself fail.
///
/// The objective's error is carried as-is; the run stops at the first
/// failed evaluation.
#[derive(Debug, Error)]
pub enum RunError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("objective evaluation failed: {0}")]
    Objective(E),
}
