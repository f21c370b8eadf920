//! Instrument definitions and the engine-carrying [`Instrument`] handle.
//!
//! Economic terms live in plain value types (this module for equity options,
//! [`crate::rates`] for rate products). [`Product`] closes them into one sum type and
//! [`Instrument`] pairs a product with an optional pricing engine.

pub mod asian;
pub mod barrier;
pub mod digital;
pub mod vanilla;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{InstrumentKind, PricingEngine, PricingError};
use crate::rates::{Cap, Caplet, Floor, InterestRateSwap, Swaption};

pub use asian::AsianOption;
pub use barrier::BarrierOption;
pub use digital::DigitalOption;
pub use vanilla::EuropeanOption;

/// Closed set of priceable products, one variant per [`InstrumentKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    European(EuropeanOption),
    Digital(DigitalOption),
    Asian(AsianOption),
    Barrier(BarrierOption),
    Caplet(Caplet),
    Cap(Cap),
    Floor(Floor),
    Swap(InterestRateSwap),
    Swaption(Swaption),
}

impl Product {
    /// Runtime discriminant used by engines and the selector.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::European(_) => InstrumentKind::European,
            Self::Digital(_) => InstrumentKind::Digital,
            Self::Asian(_) => InstrumentKind::Asian,
            Self::Barrier(_) => InstrumentKind::Barrier,
            Self::Caplet(_) => InstrumentKind::Caplet,
            Self::Cap(_) => InstrumentKind::Cap,
            Self::Floor(_) => InstrumentKind::Floor,
            Self::Swap(_) => InstrumentKind::Swap,
            Self::Swaption(_) => InstrumentKind::Swaption,
        }
    }

    pub fn as_european(&self) -> Option<&EuropeanOption> {
        match self {
            Self::European(option) => Some(option),
            _ => None,
        }
    }

    pub fn as_digital(&self) -> Option<&DigitalOption> {
        match self {
            Self::Digital(option) => Some(option),
            _ => None,
        }
    }

    pub fn as_asian(&self) -> Option<&AsianOption> {
        match self {
            Self::Asian(option) => Some(option),
            _ => None,
        }
    }

    pub fn as_barrier(&self) -> Option<&BarrierOption> {
        match self {
            Self::Barrier(option) => Some(option),
            _ => None,
        }
    }

    pub fn as_caplet(&self) -> Option<&Caplet> {
        match self {
            Self::Caplet(caplet) => Some(caplet),
            _ => None,
        }
    }

    pub fn as_cap(&self) -> Option<&Cap> {
        match self {
            Self::Cap(cap) => Some(cap),
            _ => None,
        }
    }

    pub fn as_floor(&self) -> Option<&Floor> {
        match self {
            Self::Floor(floor) => Some(floor),
            _ => None,
        }
    }

    pub fn as_swap(&self) -> Option<&InterestRateSwap> {
        match self {
            Self::Swap(swap) => Some(swap),
            _ => None,
        }
    }

    pub fn as_swaption(&self) -> Option<&Swaption> {
        match self {
            Self::Swaption(swaption) => Some(swaption),
            _ => None,
        }
    }
}

impl From<EuropeanOption> for Product {
    fn from(value: EuropeanOption) -> Self {
        Self::European(value)
    }
}

impl From<DigitalOption> for Product {
    fn from(value: DigitalOption) -> Self {
        Self::Digital(value)
    }
}

impl From<AsianOption> for Product {
    fn from(value: AsianOption) -> Self {
        Self::Asian(value)
    }
}

impl From<BarrierOption> for Product {
    fn from(value: BarrierOption) -> Self {
        Self::Barrier(value)
    }
}

impl From<Caplet> for Product {
    fn from(value: Caplet) -> Self {
        Self::Caplet(value)
    }
}

impl From<Cap> for Product {
    fn from(value: Cap) -> Self {
        Self::Cap(value)
    }
}

impl From<Floor> for Product {
    fn from(value: Floor) -> Self {
        Self::Floor(value)
    }
}

impl From<InterestRateSwap> for Product {
    fn from(value: InterestRateSwap) -> Self {
        Self::Swap(value)
    }
}

impl From<Swaption> for Product {
    fn from(value: Swaption) -> Self {
        Self::Swaption(value)
    }
}

/// A product together with the engine that values it.
///
/// The engine slot starts empty and may be reattached at any time. Engines are shared
/// handles, so one engine can serve many instruments.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use pricer::engines::analytic::BlackScholesEngine;
/// use pricer::instruments::{EuropeanOption, Instrument};
/// use pricer::models::BlackScholesModel;
///
/// let model = BlackScholesModel::builder()
///     .spot(100.0)
///     .rate(0.02)
///     .vol(0.2)
///     .build()
///     .unwrap();
///
/// let mut option = Instrument::new(EuropeanOption::call(100.0, 1.0));
/// assert_eq!(option.npv().unwrap(), 0.0);
///
/// option.set_pricing_engine(Arc::new(BlackScholesEngine::new(Arc::new(model))));
/// assert!((option.npv().unwrap() - 8.916).abs() < 1e-3);
/// ```
#[derive(Clone)]
pub struct Instrument {
    product: Product,
    engine: Option<Arc<dyn PricingEngine>>,
}

impl Instrument {
    pub fn new(product: impl Into<Product>) -> Self {
        Self {
            product: product.into(),
            engine: None,
        }
    }

    /// Builder-style variant of [`Self::set_pricing_engine`].
    pub fn with_pricing_engine(mut self, engine: Arc<dyn PricingEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        self.product.kind()
    }

    /// Attaches `engine`, replacing any previous one.
    pub fn set_pricing_engine(&mut self, engine: Arc<dyn PricingEngine>) {
        self.engine = Some(engine);
    }

    /// Detaches the current engine, returning it.
    pub fn clear_pricing_engine(&mut self) -> Option<Arc<dyn PricingEngine>> {
        self.engine.take()
    }

    pub fn pricing_engine(&self) -> Option<&Arc<dyn PricingEngine>> {
        self.engine.as_ref()
    }

    pub fn has_pricing_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Present value from the attached engine.
    ///
    /// With no engine attached the value is `0.0`, not an error; use
    /// [`Self::has_pricing_engine`] to tell the two apart.
    ///
    /// # Errors
    /// Whatever the attached engine reports, e.g. [`PricingError::TypeMismatch`].
    pub fn npv(&self) -> Result<f64, PricingError> {
        match &self.engine {
            Some(engine) => engine.evaluate(self),
            None => {
                tracing::debug!(kind = %self.kind(), "npv requested with no pricing engine attached");
                Ok(0.0)
            }
        }
    }
}

impl fmt::Debug for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrument")
            .field("product", &self.product)
            .field("engine", &self.engine.as_ref().map(|engine| engine.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;

    #[derive(Debug)]
    struct FixedEngine(f64);

    impl PricingEngine for FixedEngine {
        fn name(&self) -> &'static str {
            "FixedEngine"
        }

        fn target_kind(&self) -> InstrumentKind {
            InstrumentKind::European
        }

        fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError> {
            instrument
                .product()
                .as_european()
                .map(|_| self.0)
                .ok_or_else(|| self.type_mismatch(instrument))
        }
    }

    #[test]
    fn unset_engine_values_to_zero() {
        let option = Instrument::new(EuropeanOption::put(90.0, 0.5));
        assert!(!option.has_pricing_engine());
        assert_eq!(option.npv(), Ok(0.0));
    }

    #[test]
    fn engine_can_be_reattached_and_cleared() {
        let mut option = Instrument::new(EuropeanOption::call(100.0, 1.0));
        option.set_pricing_engine(Arc::new(FixedEngine(1.5)));
        assert_eq!(option.npv(), Ok(1.5));

        option.set_pricing_engine(Arc::new(FixedEngine(2.5)));
        assert_eq!(option.npv(), Ok(2.5));

        let detached = option.clear_pricing_engine();
        assert_eq!(detached.map(|engine| engine.name()), Some("FixedEngine"));
        assert_eq!(option.npv(), Ok(0.0));
    }

    #[test]
    fn one_engine_serves_many_instruments() {
        let engine: Arc<dyn PricingEngine> = Arc::new(FixedEngine(3.0));
        let a = Instrument::new(EuropeanOption::call(100.0, 1.0))
            .with_pricing_engine(Arc::clone(&engine));
        let b = Instrument::new(EuropeanOption::put(100.0, 1.0))
            .with_pricing_engine(Arc::clone(&engine));

        assert_eq!(a.npv(), Ok(3.0));
        assert_eq!(b.npv(), Ok(3.0));
        assert_eq!(Arc::strong_count(&engine), 3);
    }

    #[test]
    fn wrong_kind_surfaces_type_mismatch() {
        let payoff = DigitalOption::cash_or_nothing(OptionType::Call, 100.0, 1.0, 10.0);
        let digital = Instrument::new(payoff).with_pricing_engine(Arc::new(FixedEngine(1.0)));

        assert_eq!(
            digital.npv(),
            Err(PricingError::TypeMismatch {
                engine: "FixedEngine",
                expected: "european",
                found: "digital",
            })
        );
    }

    #[test]
    fn product_kind_matches_variant() {
        let barrier: Product = BarrierOption::down_and_in(OptionType::Put, 100.0, 1.0, 80.0).into();
        assert_eq!(barrier.kind(), InstrumentKind::Barrier);
        assert!(barrier.as_barrier().is_some());
        assert!(barrier.as_asian().is_none());
    }
}
