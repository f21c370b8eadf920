//! Rule-based engine selection.
//!
//! [`EngineSelector`] is a total function from [`InstrumentKind`] to a configured engine.
//! Closed-form kinds get their analytic engine; Asian and barrier options get a Monte
//! Carlo engine with the selector's fixed [`SelectorDefaults`]. Callers who need other
//! simulation settings build and attach an engine themselves.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::engines::analytic::{
    BlackScholesEngine, CapBlackEngine, CapletBlackEngine, DigitalBlackScholesEngine,
    FloorBlackEngine, SwapEngine, SwaptionBlackEngine,
};
use crate::engines::monte_carlo::{AsianMonteCarloEngine, BarrierMonteCarloEngine};
use crate::instruments::Instrument;
use crate::mc::McConfig;
use crate::models::{BlackRateModel, BlackScholesModel};

/// Monte Carlo parameters the selector assigns to path-dependent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorDefaults {
    pub asian: McConfig,
    pub barrier: McConfig,
}

impl Default for SelectorDefaults {
    fn default() -> Self {
        Self {
            asian: McConfig::new(10_000, 50, 777),
            barrier: McConfig::new(10_000, 252, 2024),
        }
    }
}

/// Maps instruments to engines bound to the selector's models.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use pricer::engines::EngineSelector;
/// use pricer::instruments::{EuropeanOption, Instrument};
/// use pricer::models::{BlackRateModel, BlackScholesModel};
///
/// let equity = BlackScholesModel::builder().spot(100.0).rate(0.02).vol(0.2).build().unwrap();
/// let rates = BlackRateModel::flat(0.02, 0.25).unwrap();
/// let selector = EngineSelector::new(Arc::new(equity), Arc::new(rates));
///
/// let mut call = Instrument::new(EuropeanOption::call(100.0, 1.0));
/// selector.attach(&mut call).unwrap();
/// assert_eq!(call.pricing_engine().unwrap().name(), "BlackScholesEngine");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineSelector {
    equity_model: Option<Arc<BlackScholesModel>>,
    rate_model: Option<Arc<BlackRateModel>>,
    defaults: SelectorDefaults,
}

impl EngineSelector {
    /// Selector covering every kind.
    pub fn new(equity_model: Arc<BlackScholesModel>, rate_model: Arc<BlackRateModel>) -> Self {
        Self {
            equity_model: Some(equity_model),
            rate_model: Some(rate_model),
            defaults: SelectorDefaults::default(),
        }
    }

    pub fn with_equity_model(mut self, model: Arc<BlackScholesModel>) -> Self {
        self.equity_model = Some(model);
        self
    }

    pub fn with_rate_model(mut self, model: Arc<BlackRateModel>) -> Self {
        self.rate_model = Some(model);
        self
    }

    pub fn with_defaults(mut self, defaults: SelectorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &SelectorDefaults {
        &self.defaults
    }

    /// Engine for `instrument`'s kind.
    ///
    /// # Errors
    /// [`PricingError::UnsupportedInstrument`] when the selector lacks the model the kind
    /// is priced with.
    pub fn select(&self, instrument: &Instrument) -> Result<Arc<dyn PricingEngine>, PricingError> {
        self.select_for_kind(instrument.kind())
    }

    /// Engine for an instrument kind.
    ///
    /// # Errors
    /// See [`Self::select`].
    pub fn select_for_kind(
        &self,
        kind: InstrumentKind,
    ) -> Result<Arc<dyn PricingEngine>, PricingError> {
        let engine: Arc<dyn PricingEngine> = match kind {
            InstrumentKind::European => Arc::new(BlackScholesEngine::new(self.equity(kind)?)),
            InstrumentKind::Digital => {
                Arc::new(DigitalBlackScholesEngine::new(self.equity(kind)?))
            }
            InstrumentKind::Asian => Arc::new(AsianMonteCarloEngine::with_config(
                self.equity(kind)?,
                self.defaults.asian,
            )),
            InstrumentKind::Barrier => Arc::new(BarrierMonteCarloEngine::with_config(
                self.equity(kind)?,
                self.defaults.barrier,
            )),
            InstrumentKind::Caplet => Arc::new(CapletBlackEngine::new(self.rates(kind)?)),
            InstrumentKind::Cap => Arc::new(CapBlackEngine::new(self.rates(kind)?)),
            InstrumentKind::Floor => Arc::new(FloorBlackEngine::new(self.rates(kind)?)),
            InstrumentKind::Swap => Arc::new(SwapEngine::new(self.rates(kind)?)),
            InstrumentKind::Swaption => Arc::new(SwaptionBlackEngine::new(self.rates(kind)?)),
        };

        match kind {
            InstrumentKind::Asian => tracing::debug!(
                %kind,
                engine = engine.name(),
                paths = self.defaults.asian.num_paths,
                steps = self.defaults.asian.num_steps,
                seed = self.defaults.asian.seed,
                "selected pricing engine"
            ),
            InstrumentKind::Barrier => tracing::debug!(
                %kind,
                engine = engine.name(),
                paths = self.defaults.barrier.num_paths,
                steps = self.defaults.barrier.num_steps,
                seed = self.defaults.barrier.seed,
                "selected pricing engine"
            ),
            _ => tracing::debug!(%kind, engine = engine.name(), "selected pricing engine"),
        }

        Ok(engine)
    }

    fn equity(&self, kind: InstrumentKind) -> Result<Arc<BlackScholesModel>, PricingError> {
        self.equity_model
            .clone()
            .ok_or(PricingError::UnsupportedInstrument { kind })
    }

    fn rates(&self, kind: InstrumentKind) -> Result<Arc<BlackRateModel>, PricingError> {
        self.rate_model
            .clone()
            .ok_or(PricingError::UnsupportedInstrument { kind })
    }

    /// Selects an engine for `instrument` and attaches it.
    ///
    /// # Errors
    /// See [`Self::select`]; the instrument is left untouched on failure.
    pub fn attach(&self, instrument: &mut Instrument) -> Result<(), PricingError> {
        let engine = self.select(instrument)?;
        instrument.set_pricing_engine(engine);
        Ok(())
    }
}
