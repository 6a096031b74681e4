//! SA execution loop.

use std::convert::Infallible;

use tracing::{debug, instrument, trace};

use super::config::{AnnealConfig, Bounds};
use super::random::{RandomSource, RngSource};
use crate::error::{ConfigError, RunError};

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best point found.
    pub best: f64,

    /// Objective value at `best`.
    pub best_eval: f64,

    /// Best-so-far objective value after each iteration.
    ///
    /// Non-increasing; its length equals the configured iteration count.
    pub trajectory: Vec<f64>,

    /// The starting point drawn inside the bounds.
    pub initial: f64,

    /// Number of candidates that became the current point.
    pub accepted_moves: usize,

    /// Number of candidates strictly better than the current point.
    pub improving_moves: usize,

    /// Effective temperature at the last iteration.
    pub final_temperature: f64,
}

impl AnnealResult {
    /// One-line summary of the best solution.
    pub fn summary(&self) -> String {
        format!(
            "Best solution found: x = {:.4}, f(x) = {:.4}",
            self.best, self.best_eval
        )
    }

    /// Fraction of iterations whose candidate was accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        self.accepted_moves as f64 / self.trajectory.len() as f64
    }
}

/// Metropolis acceptance probability `exp(-diff / temperature)`.
///
/// Underflows to exactly `0.0` when `diff / temperature` is large, so
/// worsening moves are rejected almost surely late in the run.
#[inline]
pub fn metropolis(diff: f64, temperature: f64) -> f64 {
    (-diff / temperature).exp()
}

/// Executes simulated annealing over a univariate objective.
pub struct Annealer;

impl Annealer {
    /// Runs annealing with the default random source.
    ///
    /// The source is seeded from `config.seed`, or from the OS if unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::sa::{AnnealConfig, Annealer, Bounds};
    ///
    /// let config = AnnealConfig::default().with_iterations(500).with_seed(1);
    /// let result = Annealer::run(|x: f64| x * x, &Bounds::default(), &config).unwrap();
    /// assert_eq!(result.trajectory.len(), 500);
    /// ```
    pub fn run<F>(
        objective: F,
        bounds: &Bounds,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, ConfigError>
    where
        F: FnMut(f64) -> f64,
    {
        let mut source = RngSource::from_seed_option(config.seed);
        Self::run_with_source(objective, bounds, config, &mut source)
    }

    /// Runs annealing drawing from `source`. `config.seed` is ignored.
    pub fn run_with_source<F, S>(
        mut objective: F,
        bounds: &Bounds,
        config: &AnnealConfig,
        source: &mut S,
    ) -> Result<AnnealResult, ConfigError>
    where
        F: FnMut(f64) -> f64,
        S: RandomSource + ?Sized,
    {
        Self::try_run_with_source(|x| Ok::<_, Infallible>(objective(x)), bounds, config, source)
            .map_err(|err| match err {
                RunError::Config(e) => e,
                RunError::Objective(never) => match never {},
            })
    }

    /// Runs annealing on an objective that may fail.
    ///
    /// The first failed evaluation aborts the run and its error is returned
    /// unchanged in [`RunError::Objective`].
    pub fn try_run<F, E>(
        objective: F,
        bounds: &Bounds,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, RunError<E>>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let mut source = RngSource::from_seed_option(config.seed);
        Self::try_run_with_source(objective, bounds, config, &mut source)
    }

    /// Runs annealing on a fallible objective drawing from `source`.
    #[instrument(
        level = "debug",
        skip_all,
        name = "anneal",
        fields(iterations = config.iterations, step_size = config.step_size)
    )]
    pub fn try_run_with_source<F, E, S>(
        mut objective: F,
        bounds: &Bounds,
        config: &AnnealConfig,
        source: &mut S,
    ) -> Result<AnnealResult, RunError<E>>
    where
        F: FnMut(f64) -> Result<f64, E>,
        S: RandomSource + ?Sized,
    {
        config.validate()?;
        bounds.validate()?;

        let mut eval = |x: f64| objective(x).map_err(RunError::Objective);

        // Initialize
        let initial = bounds.sample(source.uniform());
        let mut current = initial;
        let mut current_eval = eval(current)?;
        let mut best = current;
        let mut best_eval = current_eval;

        debug!(initial, initial_eval = current_eval, "starting annealing run");

        let mut trajectory = Vec::with_capacity(config.iterations);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = config.initial_temperature;

        for i in 0..config.iterations {
            let candidate = current + source.standard_normal() * config.step_size;
            let candidate_eval = eval(candidate)?;

            if candidate_eval < best_eval {
                best = candidate;
                best_eval = candidate_eval;
            }

            let diff = candidate_eval - current_eval;
            temperature = config.temperature_at(i);
            let probability = metropolis(diff, temperature);

            // Metropolis acceptance criterion; the uniform draw is only made
            // for non-improving moves.
            let accept = if diff < 0.0 {
                improving_moves += 1;
                true
            } else {
                source.uniform() < probability
            };

            if accept {
                if diff >= 0.0 {
                    trace!(iteration = i, diff, temperature, probability, "accepted uphill move");
                }
                current = candidate;
                current_eval = candidate_eval;
                accepted_moves += 1;
            }

            trajectory.push(best_eval);
        }

        debug!(
            best,
            best_eval, accepted_moves, improving_moves, "annealing run finished"
        );

        Ok(AnnealResult {
            best,
            best_eval,
            trajectory,
            initial,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}
