//! Pricing engines: closed-form analytics, Monte Carlo, and the engine selector.

pub mod analytic;
pub mod monte_carlo;
pub mod selector;

pub use selector::{EngineSelector, SelectorDefaults};
