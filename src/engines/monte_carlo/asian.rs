use std::sync::Arc;

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::instruments::{AsianOption, Instrument};
use crate::mc::{simulate, GbmStepper, McConfig, McEstimate, PathFunctional};
use crate::models::BlackScholesModel;
use crate::pricing::Payoff;

/// Arithmetic average of the post-step levels; the spot itself is not observed.
struct ArithmeticAverage<'a> {
    payoff: &'a Payoff,
}

impl PathFunctional for ArithmeticAverage<'_> {
    type State = f64;

    fn start(&self, _spot: f64) -> f64 {
        0.0
    }

    #[inline]
    fn observe(&self, sum: &mut f64, level: f64) {
        *sum += level;
    }

    fn finish(&self, sum: f64, _terminal: f64, steps: usize) -> f64 {
        self.payoff.value(sum / steps as f64)
    }
}

/// Monte Carlo engine for arithmetic-average Asian options under GBM.
#[derive(Debug, Clone)]
pub struct AsianMonteCarloEngine {
    model: Arc<BlackScholesModel>,
    config: McConfig,
}

impl AsianMonteCarloEngine {
    /// Single-stream engine with `num_paths` paths of `num_steps` steps.
    pub fn new(
        model: Arc<BlackScholesModel>,
        num_paths: usize,
        num_steps: usize,
        seed: u64,
    ) -> Self {
        Self::with_config(model, McConfig::new(num_paths, num_steps, seed))
    }

    pub fn with_config(model: Arc<BlackScholesModel>, config: McConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &McConfig {
        &self.config
    }

    /// Price and standard error for `option`.
    ///
    /// # Errors
    /// [`PricingError::InvalidSimulationConfig`] for zero paths, steps or streams.
    pub fn simulate(&self, option: &AsianOption) -> Result<McEstimate, PricingError> {
        let maturity = option.maturity();
        let stepper = GbmStepper::new(&self.model, maturity, self.config.num_steps);
        let functional = ArithmeticAverage {
            payoff: option.payoff(),
        };
        simulate(
            &self.config,
            &stepper,
            &functional,
            self.model.discount(maturity.max(0.0)),
        )
    }
}

impl PricingEngine for AsianMonteCarloEngine {
    fn name(&self) -> &'static str {
        "AsianMonteCarloEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Asian
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let option = instrument
            .product()
            .as_asian()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        Ok(self.simulate(option)?.price)
    }
}
