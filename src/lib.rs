//! Simulated annealing for univariate continuous objectives.
//!
//! The crate minimizes a real function of one real variable with a single
//! annealing trajectory:
//!
//! - **Annealer** ([`sa`]): random start inside the bounds, Gaussian
//!   perturbation, Metropolis acceptance under a harmonically decreasing
//!   temperature, and a best-so-far trajectory for convergence plots.
//! - **Landscape** ([`landscape`]): dense samples of the objective over the
//!   bounds plus the best-solution marker, as plain data for a plotting
//!   front end.
//!
//! Randomness is injected through [`sa::RandomSource`], so a run can be
//! replayed draw for draw.
//!
//! # Example
//!
//! ```
//! use u_anneal::landscape::default_objective;
//! use u_anneal::sa::{AnnealConfig, Annealer, Bounds};
//!
//! let config = AnnealConfig::default().with_seed(42);
//! let result = Annealer::run(default_objective, &Bounds::default(), &config).unwrap();
//!
//! assert_eq!(result.trajectory.len(), config.iterations);
//! println!("{}", result.summary());
//! ```

pub mod error;
pub mod landscape;
pub mod sa;

pub use error::{ConfigError, RunError};
