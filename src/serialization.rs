//! serialization support for mortgages
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::mortgage::Mortgage;
use crate::types::{FrequencyOption, RateOption};

/// serializable view of a mortgage and its calculated payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageView {
    pub loan_amount: Money,
    pub rate: RateOption,
    pub annual_rate: Rate,
    pub frequency: FrequencyOption,
    pub payments_per_year: u32,
    pub amortization_years: u32,
    pub periodic_rate: Rate,
    pub number_of_payments: u32,
    pub payment: Money,
}

impl MortgageView {
    pub fn from_mortgage(mortgage: &Mortgage) -> Self {
        let calculator = mortgage.payment_calculator();
        MortgageView {
            loan_amount: mortgage.loan_amount(),
            rate: mortgage.rate(),
            annual_rate: mortgage.rate().rate(),
            frequency: mortgage.frequency(),
            payments_per_year: mortgage.frequency().payments_per_year(),
            amortization_years: mortgage.amortization_years(),
            periodic_rate: calculator.periodic_rate(),
            number_of_payments: calculator.number_of_payments(),
            payment: mortgage.calculate_payment(),
        }
    }
}

impl Mortgage {
    pub fn view(&self) -> MortgageView {
        MortgageView::from_mortgage(self)
    }

    /// export the view as pretty json
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.view()).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_view_fields() {
        let mortgage = Mortgage::new(Money::from(dec!(682912.43)), "FIXED_1", "MONTHLY", 10).unwrap();
        let view = mortgage.view();

        assert_eq!(view.rate, RateOption::Fixed1);
        assert_eq!(view.annual_rate.as_decimal(), dec!(0.0599));
        assert_eq!(view.payments_per_year, 12);
        assert_eq!(view.number_of_payments, 120);
        assert_eq!(view.payment.as_decimal(), dec!(7578.30));
    }

    #[test]
    fn test_json_output() {
        let mortgage = Mortgage::new(Money::from(dec!(682912.43)), "FIXED_1", "MONTHLY", 10).unwrap();
        let value: serde_json::Value = serde_json::from_str(&mortgage.json()).unwrap();

        assert_eq!(value["loan_amount"], "682912.43");
        assert_eq!(value["rate"], "FIXED_1");
        assert_eq!(value["frequency"], "MONTHLY");
        assert_eq!(value["amortization_years"], 10);
        assert_eq!(value["payment"], "7578.30");
    }

    #[test]
    fn test_view_round_trips_through_json() {
        let mortgage = Mortgage::new(Money::from_major(200_000), "VARIABLE_5", "BI_WEEKLY", 20).unwrap();
        let view: MortgageView = serde_json::from_str(&mortgage.json()).unwrap();
        assert_eq!(view, mortgage.view());
    }
}
