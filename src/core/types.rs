use std::fmt;

use serde::{Deserialize, Serialize};

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Barrier crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierDirection {
    /// Barrier is hit when the level trades at or above it.
    Up,
    /// Barrier is hit when the level trades at or below it.
    Down,
}

impl BarrierDirection {
    /// Whether `level` touches the barrier for this direction.
    #[inline]
    pub fn is_hit(self, level: f64, barrier: f64) -> bool {
        match self {
            Self::Up => level >= barrier,
            Self::Down => level <= barrier,
        }
    }
}

/// Barrier knock behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierStyle {
    /// Option activates once the barrier is hit.
    In,
    /// Option deactivates once the barrier is hit.
    Out,
}

impl BarrierStyle {
    /// Whether the payoff is live at expiry given the path's hit flag.
    #[inline]
    pub fn is_active(self, hit: bool) -> bool {
        match self {
            Self::In => hit,
            Self::Out => !hit,
        }
    }
}

/// The closed set of instrument kinds the engine layer knows how to price.
///
/// Adding a kind means adding a variant here, a case to
/// [`crate::instruments::Product`], an engine, and a selector arm. Every match
/// on this enum is exhaustive, so the compiler lists each place to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    European,
    Digital,
    Asian,
    Barrier,
    Caplet,
    Cap,
    Floor,
    Swap,
    Swaption,
}

impl InstrumentKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [InstrumentKind; 9] = [
        Self::European,
        Self::Digital,
        Self::Asian,
        Self::Barrier,
        Self::Caplet,
        Self::Cap,
        Self::Floor,
        Self::Swap,
        Self::Swaption,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::European => "european",
            Self::Digital => "digital",
            Self::Asian => "asian",
            Self::Barrier => "barrier",
            Self::Caplet => "caplet",
            Self::Cap => "cap",
            Self::Floor => "floor",
            Self::Swap => "swap",
            Self::Swaption => "swaption",
        }
    }

    /// Whether the kind is priced off the equity model.
    pub fn is_equity(self) -> bool {
        matches!(
            self,
            Self::European | Self::Digital | Self::Asian | Self::Barrier
        )
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InstrumentKind {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or(())
    }
}
