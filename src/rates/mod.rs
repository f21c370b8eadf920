//! Interest-rate products: caplets and floorlets, caps, floors, swaps and swaptions.
//!
//! Times are year fractions from the valuation date. Schedules are supplied directly as
//! vectors rather than generated from calendars.

pub mod capfloor;
pub mod swap;
pub mod swaption;

pub use capfloor::{Cap, Caplet, Floor};
pub use swap::InterestRateSwap;
pub use swaption::Swaption;
