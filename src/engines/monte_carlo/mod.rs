//! Monte Carlo pricing engines for path-dependent equity options.

pub mod asian;
pub mod barrier;

pub use asian::AsianMonteCarloEngine;
pub use barrier::BarrierMonteCarloEngine;
