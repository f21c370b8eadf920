//! Core traits, common domain types, and library-wide error structures.
//!
//! An engine is bound to one model when it is built and exposes a single operation,
//! [`PricingEngine::evaluate`]. Each concrete engine prices exactly one [`InstrumentKind`]
//! and rejects any other kind with [`PricingError::TypeMismatch`].

use thiserror::Error;

use crate::instruments::Instrument;

pub mod types;

pub use types::*;

/// Pricing engine abstraction over the closed instrument set.
///
/// Engines hold shared read-only handles to their model and carry no per-call state, so a
/// single engine can be attached to many instruments.
pub trait PricingEngine: std::fmt::Debug + Send + Sync {
    /// Short engine identifier for diagnostics.
    fn name(&self) -> &'static str;

    /// The only instrument kind this engine accepts.
    fn target_kind(&self) -> InstrumentKind;

    /// Prices an instrument with the engine's model.
    ///
    /// # Errors
    /// [`PricingError::TypeMismatch`] when `instrument` is not of [`Self::target_kind`],
    /// plus any engine-specific failure.
    fn evaluate(&self, instrument: &Instrument) -> Result<f64, PricingError>;

    /// Builds the mismatch error for an instrument of the wrong kind.
    fn type_mismatch(&self, instrument: &Instrument) -> PricingError {
        PricingError::TypeMismatch {
            engine: self.name(),
            expected: self.target_kind().as_str(),
            found: instrument.kind().as_str(),
        }
    }
}

/// Engine and model errors surfaced by the API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// An engine received an instrument (or payoff form) it cannot price.
    #[error("{engine} cannot price {found} (expects {expected})")]
    TypeMismatch {
        engine: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// The selector has no engine registered for this kind.
    #[error("no pricing engine registered for {kind} instruments")]
    UnsupportedInstrument { kind: InstrumentKind },
    /// Monte Carlo run requested with zero paths, steps, or streams.
    #[error("invalid simulation config: {0}")]
    InvalidSimulationConfig(String),
    /// Schedule vectors of different lengths.
    #[error("inconsistent schedule: {0}")]
    InconsistentSchedule(String),
    /// Rejected by a model or market-data builder.
    #[error("invalid market data: {0}")]
    InvalidMarketData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_context() {
        let err = PricingError::TypeMismatch {
            engine: "SwapEngine",
            expected: "swap",
            found: "caplet",
        };
        assert_eq!(err.to_string(), "SwapEngine cannot price caplet (expects swap)");

        let err = PricingError::UnsupportedInstrument {
            kind: InstrumentKind::Swaption,
        };
        assert!(err.to_string().contains("swaption"));
    }

    #[test]
    fn instrument_kind_names_round_trip_through_from_str() {
        for kind in InstrumentKind::ALL {
            assert_eq!(kind.as_str().parse::<InstrumentKind>(), Ok(kind));
        }
        assert!("lookback".parse::<InstrumentKind>().is_err());
    }

    #[test]
    fn barrier_conditions_include_the_level_itself() {
        assert!(BarrierDirection::Up.is_hit(120.0, 120.0));
        assert!(!BarrierDirection::Up.is_hit(119.99, 120.0));
        assert!(BarrierDirection::Down.is_hit(80.0, 80.0));
        assert!(!BarrierDirection::Down.is_hit(80.01, 80.0));

        assert!(BarrierStyle::In.is_active(true));
        assert!(!BarrierStyle::Out.is_active(true));
    }
}
