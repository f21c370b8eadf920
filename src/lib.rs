//! `pricer` values derivative instruments by pairing each instrument with a pricing
//! engine chosen for its kind.
//!
//! The crate covers European and cash-or-nothing digital equity options (Black-Scholes
//! closed form), arithmetic-average Asian and single-barrier options (Monte Carlo under
//! GBM), and interest-rate caplets, caps, floors, swaps and swaptions (Black-76 on a
//! flat curve).
//!
//! Layers, leaves first:
//! - [`market`]: flat discount curve and spot/dividend curve.
//! - [`models`]: equity and rate models sharing curve handles.
//! - [`pricing`] and [`instruments`] / [`rates`]: payoffs and contract terms.
//! - [`core`]: the [`core::PricingEngine`] contract and [`core::PricingError`].
//! - [`engines`]: analytic and Monte Carlo engines plus the [`engines::EngineSelector`].
//! - [`mc`]: the path simulation loop.
//!
//! # Feature Flags
//! - `parallel`: runs Monte Carlo stream blocks on the Rayon pool. Estimates are
//!   identical with and without it.
//!
//! # Quick Start
//! ```rust
//! use std::sync::Arc;
//!
//! use pricer::prelude::*;
//!
//! let equity = BlackScholesModel::builder()
//!     .spot(100.0)
//!     .rate(0.02)
//!     .vol(0.20)
//!     .build()
//!     .unwrap();
//! let rates = BlackRateModel::flat(0.02, 0.25).unwrap();
//! let selector = EngineSelector::new(Arc::new(equity), Arc::new(rates));
//!
//! let mut caplet = Instrument::new(Caplet::new(1_000_000.0, 0.03, 0.028, 0.5, 1.0, 0.5));
//! selector.attach(&mut caplet).unwrap();
//! let npv = caplet.npv().unwrap();
//! assert!((npv - 585.995).abs() < 0.01);
//! ```
//!
//! Simulation settings for path-dependent options can be chosen per engine:
//! ```rust
//! use std::sync::Arc;
//!
//! use pricer::prelude::*;
//!
//! let model = Arc::new(
//!     BlackScholesModel::builder().spot(100.0).rate(0.02).vol(0.2).build().unwrap(),
//! );
//! let engine = BarrierMonteCarloEngine::with_config(model, McConfig::new(2_000, 52, 7));
//! let option = BarrierOption::up_and_out(OptionType::Call, 100.0, 1.0, 130.0);
//! let estimate = engine.simulate(&option).unwrap();
//! assert!(estimate.price > 0.0 && estimate.stderr > 0.0);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod mc;
pub mod models;
pub mod pricing;
pub mod rates;

/// Common imports for pricing workflows.
pub mod prelude {
    pub use crate::core::{
        BarrierDirection, BarrierStyle, InstrumentKind, OptionType, PricingEngine, PricingError,
    };
    pub use crate::engines::analytic::{
        BlackScholesEngine, CapBlackEngine, CapletBlackEngine, DigitalBlackScholesEngine,
        FloorBlackEngine, SwapEngine, SwaptionBlackEngine,
    };
    pub use crate::engines::monte_carlo::{AsianMonteCarloEngine, BarrierMonteCarloEngine};
    pub use crate::engines::{EngineSelector, SelectorDefaults};
    pub use crate::instruments::{
        AsianOption, BarrierOption, DigitalOption, EuropeanOption, Instrument, Product,
    };
    pub use crate::market::{EquityCurve, FlatYieldCurve};
    pub use crate::mc::{McConfig, McEstimate};
    pub use crate::models::{BlackRateModel, BlackScholesModel};
    pub use crate::pricing::Payoff;
    pub use crate::rates::{Cap, Caplet, Floor, InterestRateSwap, Swaption};
}
