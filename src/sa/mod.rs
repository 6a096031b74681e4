//! Simulated Annealing (SA) over a univariate objective.
//!
//! A single trajectory starts at a uniform random point inside the bounds
//! and moves by Gaussian perturbation. Worsening moves are accepted with
//! the Metropolis probability `exp(-diff / t)`, where step `i` runs at
//! `t = T0 / (i + 1)`. The best point seen is tracked separately from the
//! current one and recorded after every step.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod random;
mod runner;

pub use config::{AnnealConfig, Bounds, ITERATIONS_RANGE, STEP_SIZE_RANGE, TEMPERATURE_RANGE};
pub use random::{RandomSource, RecordingSource, RngSource, ScriptedSource};
pub use runner::{metropolis, AnnealResult, Annealer};
