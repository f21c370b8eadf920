//! Monte Carlo simulation core shared by the path-dependent engines.
//!
//! Paths follow a lognormal (GBM) discretisation under the risk-neutral measure. With the
//! default single stream, one generator is seeded per run and consumed sequentially
//! across paths and steps, so path `k` sees the draws after those of paths `0..k`.
//! Changing the path count therefore changes no earlier path, but every estimate that
//! depends on the total.

use serde::{Deserialize, Serialize};

use crate::core::PricingError;

pub mod simulation;

pub use simulation::{simulate, GbmStepper, PathFunctional};

fn default_streams() -> usize {
    1
}

/// Monte Carlo run parameters.
///
/// ```
/// use pricer::mc::McConfig;
///
/// let config: McConfig =
///     serde_json::from_str(r#"{"num_paths": 10000, "num_steps": 50, "seed": 777}"#).unwrap();
/// assert_eq!(config, McConfig::new(10_000, 50, 777));
/// assert_eq!(config.streams, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct McConfig {
    pub num_paths: usize,
    pub num_steps: usize,
    pub seed: u64,
    /// Number of independent generator streams; `1` is the single advancing stream.
    #[serde(default = "default_streams")]
    pub streams: usize,
}

impl McConfig {
    pub fn new(num_paths: usize, num_steps: usize, seed: u64) -> Self {
        Self {
            num_paths,
            num_steps,
            seed,
            streams: 1,
        }
    }

    /// Splits the paths into `streams` contiguous blocks with their own generators.
    pub fn with_streams(mut self, streams: usize) -> Self {
        self.streams = streams;
        self
    }

    /// # Errors
    /// [`PricingError::InvalidSimulationConfig`] when paths, steps or streams is zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.num_paths == 0 {
            return Err(PricingError::InvalidSimulationConfig(
                "num_paths must be > 0".to_string(),
            ));
        }
        if self.num_steps == 0 {
            return Err(PricingError::InvalidSimulationConfig(
                "num_steps must be > 0".to_string(),
            ));
        }
        if self.streams == 0 {
            return Err(PricingError::InvalidSimulationConfig(
                "streams must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// `(seed, paths)` for each stream block, in block order.
    ///
    /// Block `i` is seeded with `seed + 7919 i` (wrapping), so block 0 reuses the run
    /// seed. The first `num_paths % streams` blocks carry one extra path.
    pub(crate) fn blocks(&self) -> Vec<(u64, usize)> {
        let base = self.num_paths / self.streams;
        let extra = self.num_paths % self.streams;
        (0..self.streams)
            .map(|idx| {
                let seed = stream_seed(self.seed, idx);
                let paths = base + usize::from(idx < extra);
                (seed, paths)
            })
            .collect()
    }
}

#[inline]
fn stream_seed(seed: u64, idx: usize) -> u64 {
    seed.wrapping_add((idx as u64).wrapping_mul(7_919))
}

/// Discounted Monte Carlo estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the discounted mean.
    pub stderr: f64,
    pub num_paths: usize,
}
