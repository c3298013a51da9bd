//! European vanilla options.

use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff};
use jd_core::{ensure, errors::Result, Real, Time};

/// Arguments needed for pricing a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOptionArguments {
    /// The payoff.
    pub payoff: PlainVanillaPayoff,
    /// Time to expiry in years.
    pub maturity: Time,
}

/// A European vanilla option on a single underlying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    payoff: PlainVanillaPayoff,
    maturity: Time,
}

impl EuropeanOption {
    /// Create a new European option.
    ///
    /// Fails with `Error::InvalidParameter` unless `strike > 0` and
    /// `maturity > 0`.
    pub fn new(option_type: OptionType, strike: Real, maturity: Time) -> Result<Self> {
        ensure!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        ensure!(
            maturity.is_finite() && maturity > 0.0,
            "maturity must be positive, got {maturity}"
        );
        Ok(Self {
            payoff: PlainVanillaPayoff::new(option_type, strike),
            maturity,
        })
    }

    /// Convenience: a European call.
    pub fn call(strike: Real, maturity: Time) -> Result<Self> {
        Self::new(OptionType::Call, strike, maturity)
    }

    /// Convenience: a European put.
    pub fn put(strike: Real, maturity: Time) -> Result<Self> {
        Self::new(OptionType::Put, strike, maturity)
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type
    }

    /// Time to expiry in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// The payoff.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// Get the arguments for a pricing engine.
    pub fn arguments(&self) -> EuropeanOptionArguments {
        EuropeanOptionArguments {
            payoff: self.payoff,
            maturity: self.maturity,
        }
    }

    /// Price this option using the given engine.
    pub fn price(
        &self,
        engine: &dyn PricingEngine<EuropeanOptionArguments>,
    ) -> Result<PricingResults> {
        engine.calculate(&self.arguments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jd_core::Error;

    #[derive(Debug)]
    struct IntrinsicEngine {
        spot: Real,
    }

    impl PricingEngine<EuropeanOptionArguments> for IntrinsicEngine {
        fn calculate(&self, args: &EuropeanOptionArguments) -> Result<PricingResults> {
            use crate::payoff::Payoff;
            Ok(PricingResults::from_npv(args.payoff.value(self.spot)))
        }
    }

    #[test]
    fn option_accessors() {
        let opt = EuropeanOption::put(105.0, 0.5).unwrap();
        assert_eq!(opt.option_type(), OptionType::Put);
        assert_eq!(opt.strike(), 105.0);
        assert_eq!(opt.maturity(), 0.5);
        assert_eq!(opt.arguments().payoff, *opt.payoff());
    }

    #[test]
    fn rejects_non_positive_strike_and_maturity() {
        assert!(matches!(
            EuropeanOption::call(0.0, 1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(EuropeanOption::call(100.0, 0.0).is_err());
        assert!(EuropeanOption::call(100.0, -1.0).is_err());
        assert!(EuropeanOption::call(Real::NAN, 1.0).is_err());
    }

    #[test]
    fn price_dispatches_to_engine() {
        let engine = IntrinsicEngine { spot: 112.0 };
        let opt = EuropeanOption::call(100.0, 1.0).unwrap();
        assert_eq!(opt.price(&engine).unwrap().npv, 12.0);
    }
}
