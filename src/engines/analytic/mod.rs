//! Closed-form analytic pricing engines and the Black formula library they share.

pub mod black76;
pub mod black_scholes;
pub mod capfloor;
pub mod digital;
pub mod swap;

pub use black76::{black_digital_forward, black_forward};
pub use black_scholes::BlackScholesEngine;
pub use capfloor::{CapBlackEngine, CapletBlackEngine, FloorBlackEngine};
pub use digital::DigitalBlackScholesEngine;
pub use swap::{SwapEngine, SwaptionBlackEngine};
