//! Objective landscape data for plotting.
//!
//! Nothing here renders anything. A front end takes the sampled curve and
//! the best-solution marker and draws them however it likes.

use crate::sa::{AnnealResult, Bounds};

/// Number of points used to draw the objective curve.
pub const DEFAULT_SAMPLES: usize = 1000;

/// The demo objective `f(x) = x^2 + 10 sin(x)`.
///
/// Global minimum near `x = -1.3064` (`f = -7.9458`) and a local minimum
/// near `x = 3.8375` (`f = 8.3156`).
pub fn default_objective(x: f64) -> f64 {
    x * x + 10.0 * x.sin()
}

/// `n` evenly spaced points over `[low, high]`, both ends included.
pub fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| low + i as f64 * step).collect();
            xs[n - 1] = high;
            xs
        }
    }
}

/// The objective sampled over the bounds, with an optional marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landscape {
    /// `(x, f(x))` pairs in increasing `x`.
    pub points: Vec<(f64, f64)>,

    /// `(best, best_eval)` of a run, if one was attached.
    pub best: Option<(f64, f64)>,
}

impl Landscape {
    /// Samples `objective` at `samples` evenly spaced points of `bounds`.
    pub fn sample<F>(mut objective: F, bounds: &Bounds, samples: usize) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let points = linspace(bounds.low, bounds.high, samples)
            .into_iter()
            .map(|x| (x, objective(x)))
            .collect();
        Self { points, best: None }
    }

    /// Attaches the best solution of `result` as the marker.
    pub fn with_best(mut self, result: &AnnealResult) -> Self {
        self.best = Some((result.best, result.best_eval));
        self
    }

    /// Lowest sampled point. NaN values are skipped.
    pub fn grid_minimum(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|(_, y)| !y.is_nan())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
