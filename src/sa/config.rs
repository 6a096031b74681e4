//! Run configuration and search bounds.

use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Iteration counts offered by the interactive front end.
pub const ITERATIONS_RANGE: RangeInclusive<usize> = 100..=5000;

/// Step sizes offered by the interactive front end.
pub const STEP_SIZE_RANGE: RangeInclusive<f64> = 0.01..=2.0;

/// Initial temperatures offered by the interactive front end.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 1.0..=100.0;

/// Interval `[low, high]` the starting point is drawn from.
///
/// Only the initial point is sampled inside the bounds. Candidates produced
/// by perturbation are not clamped and may leave the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            low: -10.0,
            high: 10.0,
        }
    }
}

impl Bounds {
    /// Creates validated bounds.
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        let bounds = Self { low, high };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Maps `u` in `[0, 1)` onto the interval.
    ///
    /// Falls back to interpolating the two ends when the width overflows,
    /// so bounds near `f64::MAX` still give a finite point.
    pub fn sample(&self, u: f64) -> f64 {
        let width = self.width();
        let x = if width.is_finite() {
            self.low + u * width
        } else {
            self.low * (1.0 - u) + self.high * u
        };
        x.clamp(self.low, self.high)
    }

    /// Whether `x` lies in the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Both ends finite and `low < high`. NaN ends are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.low < self.high;
        if !ordered || !self.low.is_finite() || !self.high.is_finite() {
            return Err(ConfigError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

impl TryFrom<(f64, f64)> for Bounds {
    type Error = ConfigError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

/// Configuration for an annealing run.
///
/// Captured once from the caller's parameter source and never mutated by
/// the run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_iterations(2000)
///     .with_step_size(0.5)
///     .with_initial_temperature(25.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of perturbation steps. Also the trajectory length.
    pub iterations: usize,

    /// Standard deviation of the Gaussian perturbation.
    pub step_size: f64,

    /// Temperature at the first step. Step `i` (0-based) runs at
    /// `initial_temperature / (i + 1)`.
    pub initial_temperature: f64,

    /// Seed for the default random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            step_size: 0.1,
            initial_temperature: 10.0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        Ok(())
    }

    /// Effective temperature at 0-based step `i`.
    ///
    /// Harmonic decay: positive for every step, tending to zero.
    pub fn temperature_at(&self, i: usize) -> f64 {
        self.initial_temperature / (i + 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.step_size - 0.1).abs() < 1e-12);
        assert!((config.initial_temperature - 10.0).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(ITERATIONS_RANGE.contains(&config.iterations));
        assert!(STEP_SIZE_RANGE.contains(&config.step_size));
        assert!(TEMPERATURE_RANGE.contains(&config.initial_temperature));
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AnnealConfig::default().with_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidIterations));
    }

    #[test]
    fn test_validate_bad_step_size() {
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_step_size(step);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidStepSize(_))),
                "step {step} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTemperature(_))
            ));
        }
    }

    #[test]
    fn test_temperature_schedule() {
        let config = AnnealConfig::default().with_initial_temperature(12.0);
        assert_eq!(config.temperature_at(0), 12.0);
        assert_eq!(config.temperature_at(1), 6.0);
        assert_eq!(config.temperature_at(3), 3.0);
        assert!(config.temperature_at(usize::MAX - 1) > 0.0);
    }

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.low, -10.0);
        assert_eq!(bounds.high, 10.0);
        assert_eq!(bounds.width(), 20.0);
        assert!(bounds.validate().is_ok());
    }

    #[test]
    fn test_degenerate_bounds() {
        assert!(Bounds::new(5.0, 5.0).is_err());
        assert!(Bounds::new(5.0, -5.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
        assert!(Bounds::try_from((-1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::default();
        assert!(bounds.contains(-10.0));
        assert!(bounds.contains(10.0));
        assert!(!bounds.contains(10.5));
    }

    #[test]
    fn test_sample_maps_unit_interval() {
        let bounds = Bounds::default();
        assert_eq!(bounds.sample(0.0), -10.0);
        assert_eq!(bounds.sample(0.5), 0.0);
        assert_eq!(bounds.sample(0.75), 5.0);
    }

    #[test]
    fn test_sample_extreme_bounds_stays_finite() {
        let bounds = Bounds::new(-f64::MAX, f64::MAX).unwrap();
        assert!(bounds.width().is_infinite());
        for u in [0.0, 0.25, 0.5, 1.0 - f64::EPSILON] {
            let x = bounds.sample(u);
            assert!(x.is_finite(), "u = {u} gave {x}");
            assert!(bounds.contains(x), "u = {u} gave {x} outside the bounds");
        }
        assert_eq!(bounds.sample(0.0), -f64::MAX);
        assert_eq!(bounds.sample(0.5), 0.0);
    }
}
