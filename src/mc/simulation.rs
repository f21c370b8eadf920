//! GBM path stepping and the simulation loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::core::PricingError;
use crate::models::BlackScholesModel;

use super::{McConfig, McEstimate};

/// Exact one-step lognormal update `S <- S exp(drift + vol_step Z)` on a uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmStepper {
    spot: f64,
    drift: f64,
    vol_step: f64,
    steps: usize,
}

impl GbmStepper {
    /// Grid of `steps` intervals over `[0, maturity]`. A non-positive maturity collapses
    /// the grid, leaving every path at spot.
    pub fn new(model: &BlackScholesModel, maturity: f64, steps: usize) -> Self {
        let sigma = model.sigma();
        let dt = maturity.max(0.0) / steps.max(1) as f64;
        Self {
            spot: model.spot(),
            drift: (model.rate() - model.dividend_yield() - 0.5 * sigma * sigma) * dt,
            vol_step: sigma * dt.sqrt(),
            steps,
        }
    }

    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn step(&self, level: f64, z: f64) -> f64 {
        level * self.vol_step.mul_add(z, self.drift).exp()
    }
}

/// Path-dependent payoff evaluated incrementally, one observation per time step.
///
/// The state holds whatever the payoff needs from the path (a running sum, a hit flag)
/// and is dropped after the path ends.
pub trait PathFunctional: Sync {
    type State;

    fn start(&self, spot: f64) -> Self::State;

    /// Called with the level after every step, including the last.
    fn observe(&self, state: &mut Self::State, level: f64);

    /// Undiscounted path payoff.
    fn finish(&self, state: Self::State, terminal: f64, steps: usize) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
struct PathStats {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PathStats {
    #[inline]
    fn push(&mut self, x: f64) {
        self.sum += x;
        self.sum_sq += x * x;
        self.count += 1;
    }

    fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }
}

#[inline]
fn simulate_path<F: PathFunctional>(
    rng: &mut StdRng,
    stepper: &GbmStepper,
    functional: &F,
) -> f64 {
    let mut level = stepper.spot;
    let mut state = functional.start(level);
    for _ in 0..stepper.steps {
        let z: f64 = StandardNormal.sample(rng);
        level = stepper.step(level, z);
        functional.observe(&mut state, level);
    }
    functional.finish(state, level, stepper.steps)
}

fn simulate_block<F: PathFunctional>(
    rng: &mut StdRng,
    paths: usize,
    stepper: &GbmStepper,
    functional: &F,
    mut sink: impl FnMut(f64),
) {
    for _ in 0..paths {
        sink(simulate_path(rng, stepper, functional));
    }
}

fn run_block<F: PathFunctional>(
    (seed, paths): (u64, usize),
    stepper: &GbmStepper,
    functional: &F,
) -> PathStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = PathStats::default();
    simulate_block(&mut rng, paths, stepper, functional, |x| stats.push(x));
    stats
}

/// Runs `config.num_paths` paths and discounts the mean payoff once.
///
/// Block statistics are merged in block order, so the estimate is bit-identical for a
/// given configuration whether or not the `parallel` feature is enabled.
///
/// # Errors
/// [`PricingError::InvalidSimulationConfig`] from [`McConfig::validate`].
pub fn simulate<F: PathFunctional>(
    config: &McConfig,
    stepper: &GbmStepper,
    functional: &F,
    discount_factor: f64,
) -> Result<McEstimate, PricingError> {
    config.validate()?;
    if stepper.steps != config.num_steps {
        return Err(PricingError::InvalidSimulationConfig(format!(
            "stepper has {} steps, config has {}",
            stepper.steps, config.num_steps
        )));
    }

    let blocks = config.blocks();

    #[cfg(feature = "parallel")]
    let per_block: Vec<PathStats> = blocks
        .into_par_iter()
        .map(|block| run_block(block, stepper, functional))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let per_block: Vec<PathStats> = blocks
        .into_iter()
        .map(|block| run_block(block, stepper, functional))
        .collect();

    let stats = per_block
        .into_iter()
        .fold(PathStats::default(), PathStats::merge);

    let n = stats.count as f64;
    let mean = stats.sum / n;
    let var = if stats.count > 1 {
        ((stats.sum_sq - stats.sum * stats.sum / n) / (n - 1.0)).max(0.0)
    } else {
        0.0
    };

    let estimate = McEstimate {
        price: discount_factor * mean,
        stderr: discount_factor * (var / n).sqrt(),
        num_paths: stats.count,
    };

    tracing::debug!(
        paths = config.num_paths,
        steps = config.num_steps,
        seed = config.seed,
        streams = config.streams,
        price = estimate.price,
        stderr = estimate.stderr,
        "monte carlo run finished"
    );

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    struct Terminal;

    impl PathFunctional for Terminal {
        type State = ();

        fn start(&self, _spot: f64) -> Self::State {}

        fn observe(&self, _state: &mut Self::State, _level: f64) {}

        fn finish(&self, _state: Self::State, terminal: f64, _steps: usize) -> f64 {
            terminal
        }
    }

    fn model() -> BlackScholesModel {
        BlackScholesModel::builder()
            .spot(100.0)
            .rate(0.03)
            .dividend_yield(0.01)
            .vol(0.25)
            .build()
            .unwrap()
    }

    #[test]
    fn each_path_consumes_exactly_num_steps_draws() {
        let stepper = GbmStepper::new(&model(), 1.0, 4);
        let mut rng = StdRng::seed_from_u64(11);
        simulate_block(&mut rng, 3, &stepper, &Terminal, |_| {});
        let next: f64 = StandardNormal.sample(&mut rng);

        let mut fresh = StdRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..13).map(|_| StandardNormal.sample(&mut fresh)).collect();
        assert_eq!(next, draws[12]);
    }

    #[test]
    fn more_paths_extend_the_same_sequence() {
        let stepper = GbmStepper::new(&model(), 1.0, 8);
        let mut short = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        simulate_block(&mut rng, 50, &stepper, &Terminal, |x| short.push(x));
        let mut long = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        simulate_block(&mut rng, 100, &stepper, &Terminal, |x| long.push(x));

        assert_eq!(short[..], long[..50]);
    }

    #[test]
    fn terminal_mean_matches_forward() {
        let m = model();
        let stepper = GbmStepper::new(&m, 1.0, 4);
        let config = McConfig::new(50_000, 4, 2024);
        let estimate = simulate(&config, &stepper, &Terminal, 1.0).unwrap();

        assert!((estimate.price - m.forward(1.0)).abs() < 4.0 * estimate.stderr);
        assert_eq!(estimate.num_paths, 50_000);
    }

    #[test]
    fn zero_maturity_keeps_every_path_at_spot() {
        let stepper = GbmStepper::new(&model(), 0.0, 10);
        let estimate = simulate(&McConfig::new(100, 10, 1), &stepper, &Terminal, 1.0).unwrap();
        assert_relative_eq!(estimate.price, 100.0, epsilon = 1e-12);
        assert_relative_eq!(estimate.stderr, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_stream_block_matches_plain_run() {
        let stepper = GbmStepper::new(&model(), 1.0, 6);
        let a = simulate(&McConfig::new(1_000, 6, 9), &stepper, &Terminal, 0.9).unwrap();
        let config = McConfig::new(1_000, 6, 9).with_streams(1);
        let b = simulate(&config, &stepper, &Terminal, 0.9).unwrap();
        assert_eq!(a, b);

        let config = McConfig::new(1_000, 6, 9).with_streams(4);
        let streamed = simulate(&config, &stepper, &Terminal, 0.9).unwrap();
        assert_eq!(streamed.num_paths, 1_000);
        assert_ne!(streamed.price, a.price);
    }

    #[test]
    fn stepper_and_config_must_agree() {
        let stepper = GbmStepper::new(&model(), 1.0, 6);
        assert!(matches!(
            simulate(&McConfig::new(10, 5, 1), &stepper, &Terminal, 1.0),
            Err(PricingError::InvalidSimulationConfig(_))
        ));
    }
}
