use rust_decimal::Decimal;
use tracing::trace;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::mortgage::validate_amortization;
use crate::types::{FrequencyOption, RateOption};

/// level-payment calculator for a fully amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentCalculator {
    annual_rate: Rate,
    payments_per_year: u32,
    amortization_years: u32,
}

impl PaymentCalculator {
    /// fails with `InvalidAmortization` unless the years are a permitted amortization period
    pub fn new(rate: RateOption, frequency: FrequencyOption, amortization_years: u32) -> Result<Self> {
        let amortization_years = validate_amortization(amortization_years)?;
        Ok(Self::from_validated(rate, frequency, amortization_years))
    }

    /// caller guarantees `amortization_years` is in the permitted set
    pub(crate) fn from_validated(
        rate: RateOption,
        frequency: FrequencyOption,
        amortization_years: u32,
    ) -> Self {
        Self {
            annual_rate: rate.rate(),
            payments_per_year: frequency.payments_per_year(),
            amortization_years,
        }
    }

    /// rate charged each period (i)
    pub fn periodic_rate(&self) -> Rate {
        self.annual_rate.periodic(self.payments_per_year)
    }

    /// total payments over the amortization horizon (n)
    pub fn number_of_payments(&self) -> u32 {
        self.amortization_years * self.payments_per_year
    }

    /// unrounded level payment: P * i * (1 + i)^n / ((1 + i)^n - 1)
    ///
    /// Every rate option is non-zero and every amortization period is at
    /// least five years, so the denominator is always positive.
    pub fn exact_payment(&self, principal: Money) -> Money {
        let r = self.periodic_rate().as_decimal();

        let mut compound = Decimal::ONE;
        let base = Decimal::ONE + r;
        for _ in 0..self.number_of_payments() {
            compound *= base;
        }

        let numerator = principal.as_decimal() * r * compound;
        let denominator = compound - Decimal::ONE;

        Money::from_decimal(numerator / denominator)
    }

    /// level payment rounded half-up to cents
    pub fn payment(&self, principal: Money) -> Money {
        let exact = self.exact_payment(principal);
        let rounded = exact.round_cents();
        trace!(%principal, %exact, %rounded, periods = self.number_of_payments(), "calculated payment");
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MortgageError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_formula_terms() {
        let calc = PaymentCalculator::new(RateOption::Fixed1, FrequencyOption::Monthly, 10).unwrap();
        assert_eq!(calc.number_of_payments(), 120);
        assert_eq!(calc.periodic_rate().as_decimal(), dec!(0.0599) / dec!(12));

        let weekly = PaymentCalculator::new(RateOption::Variable1, FrequencyOption::Weekly, 30).unwrap();
        assert_eq!(weekly.number_of_payments(), 1560);
    }

    #[test]
    fn test_monthly_payment() {
        let calc = PaymentCalculator::new(RateOption::Fixed1, FrequencyOption::Monthly, 10).unwrap();
        let principal = Money::from(dec!(682912.43));

        let exact = calc.exact_payment(principal);
        assert!(exact.as_decimal() > dec!(7578.299) && exact.as_decimal() < dec!(7578.300));
        assert_eq!(calc.payment(principal).to_string(), "7578.30");
    }

    #[test]
    fn test_payments_repay_principal() {
        // sum of payments always exceeds the principal, and higher frequency pays less per period
        let principal = Money::from_major(100_000);
        let monthly = PaymentCalculator::new(RateOption::Fixed3, FrequencyOption::Monthly, 25).unwrap();
        let bi_weekly = PaymentCalculator::new(RateOption::Fixed3, FrequencyOption::BiWeekly, 25).unwrap();
        let weekly = PaymentCalculator::new(RateOption::Fixed3, FrequencyOption::Weekly, 25).unwrap();

        let m = monthly.payment(principal);
        let b = bi_weekly.payment(principal);
        let w = weekly.payment(principal);
        assert!(m > b && b > w);

        let total = m.as_decimal() * Decimal::from(monthly.number_of_payments());
        assert!(total > principal.as_decimal());
    }

    #[test]
    fn test_longer_amortization_lowers_payment() {
        let principal = Money::from_major(250_000);
        let mut previous: Option<Money> = None;
        for years in crate::types::VALID_AMORTIZATION_YEARS {
            let payment = PaymentCalculator::new(RateOption::Variable3, FrequencyOption::Monthly, years)
                .unwrap()
                .payment(principal);
            if let Some(prev) = previous {
                assert!(payment < prev);
            }
            previous = Some(payment);
        }
    }

    #[test]
    fn test_payment_scales_with_principal() {
        let calc = PaymentCalculator::new(RateOption::Fixed5, FrequencyOption::Monthly, 20).unwrap();
        let small = calc.exact_payment(Money::from_major(10_000));
        let large = calc.exact_payment(Money::from_major(20_000));
        let diff = (large.as_decimal() - small.as_decimal() * dec!(2)).abs();
        assert!(diff < dec!(0.0000001));
    }

    #[test]
    fn test_rejects_unpermitted_amortization() {
        for years in [0, 1, 7, 2000, u32::MAX / 10, u32::MAX] {
            let err = PaymentCalculator::new(RateOption::Fixed1, FrequencyOption::Weekly, years).unwrap_err();
            assert_eq!(err, MortgageError::InvalidAmortization { years });
            assert_eq!(err.to_string(), "Amortization provided is invalid.");
        }
    }

    #[test]
    fn test_longest_weekly_horizon_computes() {
        let calc = PaymentCalculator::new(RateOption::Variable1, FrequencyOption::Weekly, 30).unwrap();
        let payment = calc.payment(Money::from_major(10_000_000));
        assert!(payment.is_positive());
        assert!(payment < Money::from_major(10_000_000));
    }
}
