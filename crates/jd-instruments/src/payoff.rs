//! Option payoffs at expiry.

use jd_core::Real;
use std::fmt;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Both option types, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// `φ` in `max(φ(S − K), 0)`: +1 for a call, −1 for a put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        })
    }
}

/// Value of a claim as a function of the terminal underlying price.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Undiscounted payoff for a terminal price `s_t`.
    fn value(&self, s_t: Real) -> Real;
}

/// `max(φ(S_T − K), 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike K.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Payoff of the given type struck at `strike`.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, s_t: Real) -> Real {
        (self.option_type.sign() * (s_t - self.strike)).max(0.0)
    }
}

impl fmt::Display for PlainVanillaPayoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K={}", self.option_type, self.strike)
    }
}
