use std::sync::Arc;

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::instruments::{BarrierOption, Instrument};
use crate::mc::{simulate, GbmStepper, McConfig, McEstimate, PathFunctional};
use crate::models::BlackScholesModel;

/// Discretely monitored barrier: the hit flag latches on the first grid level at or
/// beyond the barrier.
struct KnockMonitor<'a> {
    option: &'a BarrierOption,
}

impl PathFunctional for KnockMonitor<'_> {
    type State = bool;

    fn start(&self, _spot: f64) -> bool {
        false
    }

    #[inline]
    fn observe(&self, hit: &mut bool, level: f64) {
        *hit = *hit || self.option.direction().is_hit(level, self.option.barrier());
    }

    fn finish(&self, hit: bool, terminal: f64, _steps: usize) -> f64 {
        if self.option.style().is_active(hit) {
            self.option.payoff().value(terminal)
        } else {
            0.0
        }
    }
}

/// Monte Carlo engine for single-barrier knock-in / knock-out options under GBM.
///
/// Only the simulated grid levels are checked against the barrier; the spot at time
/// zero is not.
#[derive(Debug, Clone)]
pub struct BarrierMonteCarloEngine {
    model: Arc<BlackScholesModel>,
    config: McConfig,
}

impl BarrierMonteCarloEngine {
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
    pub fn simulate(&self, option: &BarrierOption) -> Result<McEstimate, PricingError> {
        let maturity = option.maturity();
        let stepper = GbmStepper::new(&self.model, maturity, self.config.num_steps);
        simulate(
            &self.config,
            &stepper,
            &KnockMonitor { option },
            self.model.discount(maturity.max(0.0)),
        )
    }
}

impl PricingEngine for BarrierMonteCarloEngine {
    fn name(&self) -> &'static str {
        "BarrierMonteCarloEngine"
    }

    fn target_kind(&self) -> InstrumentKind {
        InstrumentKind::Barrier
    }

    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        let option = instrument
            .product()
            .as_barrier()
            .ok_or_else(|| self.type_mismatch(instrument))?;
        Ok(self.simulate(option)?.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;
    use crate::instruments::AsianOption;

    fn engine(paths: usize) -> BarrierMonteCarloEngine {
        let model = BlackScholesModel::builder()
            .spot(100.0)
            .rate(0.02)
            .vol(0.2)
            .build()
            .unwrap();
        BarrierMonteCarloEngine::new(Arc::new(model), paths, 252, 2024)
    }

    #[test]
    fn in_plus_out_is_path_by_path_vanilla() {
        // Same seed, same paths: every path pays in exactly one of the two legs.
        let engine = engine(5_000);
        let out = engine
            .simulate(&BarrierOption::up_and_out(OptionType::Call, 100.0, 1.0, 120.0))
            .unwrap();
        let inn = engine
            .simulate(&BarrierOption::up_and_in(OptionType::Call, 100.0, 1.0, 120.0))
            .unwrap();
        let far = engine
            .simulate(&BarrierOption::up_and_in(OptionType::Call, 100.0, 1.0, 1.0e9))
            .unwrap();
        let never = engine
            .simulate(&BarrierOption::up_and_out(OptionType::Call, 100.0, 1.0, 1.0e9))
            .unwrap();

        assert_eq!(far.price, 0.0);
        assert!((out.price + inn.price - never.price).abs() < 1e-9);
    }

    #[test]
    fn down_barrier_above_spot_knocks_out_on_first_step() {
        let option = BarrierOption::down_and_out(OptionType::Put, 100.0, 1.0, 1.0e6);
        let estimate = engine(1_000).simulate(&option).unwrap();
        assert_eq!(estimate.price, 0.0);
    }

    #[test]
    fn rejects_other_kinds() {
        let asian = Instrument::new(AsianOption::arithmetic(OptionType::Call, 100.0, 1.0));
        assert_eq!(
            engine(10).evaluate(&asian),
            Err(PricingError::TypeMismatch {
                engine: "BarrierMonteCarloEngine",
                expected: "barrier",
                found: "asian",
            })
        );
    }
}
