//! Random sources driving the annealer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two kinds of draws the annealer makes.
///
/// The runner never touches global random state; every draw goes through
/// this trait, so a run can be replayed exactly by feeding it the same
/// sequence of values.
pub trait RandomSource {
    /// A uniform real in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A standard normal real (mean 0, variance 1).
    fn standard_normal(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Seeded from `seed` when given, otherwise from the OS.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn standard_normal(&mut self) -> f64 {
        // Box-Muller; u1 is kept away from zero so ln stays finite.
        let u1: f64 = self.rng.random_range(f64::EPSILON..=1.0);
        let u2: f64 = self.rng.random_range(0.0_f64..=std::f64::consts::TAU);
        (-2.0 * u1.ln()).sqrt() * u2.cos()
    }
}

/// Replays fixed sequences of draws.
///
/// Each stream yields its values in order and then keeps repeating its last
/// value. An empty stream yields `0.0`.
///
/// ```
/// use u_anneal::sa::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.75, 0.0], vec![0.0]);
/// assert_eq!(source.uniform(), 0.75);
/// assert_eq!(source.uniform(), 0.0);
/// assert_eq!(source.uniform(), 0.0);
/// assert_eq!(source.standard_normal(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    uniforms: Vec<f64>,
    normals: Vec<f64>,
    next_uniform: usize,
    next_normal: usize,
}

impl ScriptedSource {
    pub fn new(uniforms: Vec<f64>, normals: Vec<f64>) -> Self {
        Self {
            uniforms,
            normals,
            next_uniform: 0,
            next_normal: 0,
        }
    }

    /// Number of uniform draws served so far.
    pub fn uniform_draws(&self) -> usize {
        self.next_uniform
    }

    /// Number of normal draws served so far.
    pub fn normal_draws(&self) -> usize {
        self.next_normal
    }
}

fn replay(values: &[f64], cursor: &mut usize) -> f64 {
    let value = values
        .get(*cursor)
        .or_else(|| values.last())
        .copied()
        .unwrap_or(0.0);
    *cursor += 1;
    value
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        replay(&self.uniforms, &mut self.next_uniform)
    }

    fn standard_normal(&mut self) -> f64 {
        replay(&self.normals, &mut self.next_normal)
    }
}

/// Wraps a source and records every draw it hands out.
///
/// [`RecordingSource::into_script`] turns the recording into a
/// [`ScriptedSource`] that reproduces the same run.
#[derive(Debug, Clone)]
pub struct RecordingSource<S> {
    inner: S,
    uniforms: Vec<f64>,
    normals: Vec<f64>,
}

impl<S: RandomSource> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            uniforms: Vec::new(),
            normals: Vec::new(),
        }
    }

    pub fn uniforms(&self) -> &[f64] {
        &self.uniforms
    }

    pub fn normals(&self) -> &[f64] {
        &self.normals
    }

    pub fn into_script(self) -> ScriptedSource {
        ScriptedSource::new(self.uniforms, self.normals)
    }
}

impl<S: RandomSource> RandomSource for RecordingSource<S> {
    fn uniform(&mut self) -> f64 {
        let value = self.inner.uniform();
        self.uniforms.push(value);
        value
    }

    fn standard_normal(&mut self) -> f64 {
        let value = self.inner.standard_normal();
        self.normals.push(value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_unit_interval() {
        let mut source = RngSource::from_seed_option(Some(7));
        for _ in 0..10_000 {
            let u = source.uniform();
            assert!((0.0..1.0).contains(&u), "uniform draw {u} out of [0, 1)");
        }
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut source = RngSource::from_seed_option(Some(42));
        let n = 50_000;
        let draws: Vec<f64> = (0..n).map(|_| source.standard_normal()).collect();
        assert!(draws.iter().all(|z| z.is_finite()));

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean} too far from 0");
        assert!((var - 1.0).abs() < 0.05, "variance {var} too far from 1");
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::from_seed_option(Some(99));
        let mut b = RngSource::from_seed_option(Some(99));
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
            assert_eq!(a.standard_normal().to_bits(), b.standard_normal().to_bits());
        }
    }

    #[test]
    fn test_scripted_repeats_last_value() {
        let mut source = ScriptedSource::new(vec![0.1, 0.2], vec![]);
        assert_eq!(source.uniform(), 0.1);
        assert_eq!(source.uniform(), 0.2);
        assert_eq!(source.uniform(), 0.2);
        assert_eq!(source.standard_normal(), 0.0);
        assert_eq!(source.uniform_draws(), 3);
        assert_eq!(source.normal_draws(), 1);
    }

    #[test]
    fn test_recording_replays() {
        let mut recorder = RecordingSource::new(RngSource::from_seed_option(Some(3)));
        let first: Vec<f64> = (0..5)
            .flat_map(|_| [recorder.uniform(), recorder.standard_normal()])
            .collect();
        assert_eq!(recorder.uniforms().len(), 5);
        assert_eq!(recorder.normals().len(), 5);

        let mut replay = recorder.into_script();
        let second: Vec<f64> = (0..5)
            .flat_map(|_| [replay.uniform(), replay.standard_normal()])
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw<S: RandomSource>(mut s: S) -> f64 {
            s.uniform()
        }
        let mut source = ScriptedSource::new(vec![0.5], vec![]);
        assert_eq!(draw(&mut source), 0.5);
        assert_eq!(source.uniform_draws(), 1);
    }
}
