//! Payoff definitions shared by option-style instruments.

pub mod payoff;

pub use payoff::Payoff;
