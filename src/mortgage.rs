use std::fmt;

use tracing::debug;

use crate::decimal::Money;
use crate::errors::{MortgageError, Result};
use crate::payments::PaymentCalculator;
use crate::types::{is_valid_amortization, FrequencyOption, RateOption};

/// a single mortgage and the inputs its periodic payment is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mortgage {
    loan_amount: Money,
    rate: RateOption,
    frequency: FrequencyOption,
    amortization_years: u32,
}

impl Mortgage {
    /// create a mortgage, validating amount, rate, frequency and amortization in that order
    pub fn new(
        loan_amount: Money,
        rate: &str,
        frequency: &str,
        amortization_years: u32,
    ) -> Result<Self> {
        let mortgage = Self {
            loan_amount: validate_loan_amount(loan_amount)?,
            rate: validate_rate(rate)?,
            frequency: validate_frequency(frequency)?,
            amortization_years: validate_amortization(amortization_years)?,
        };

        debug!(
            loan_amount = %mortgage.loan_amount,
            rate = mortgage.rate.name(),
            frequency = mortgage.frequency.name(),
            amortization_years = mortgage.amortization_years,
            "mortgage created"
        );

        Ok(mortgage)
    }

    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    pub fn set_loan_amount(&mut self, amount: Money) -> Result<()> {
        self.loan_amount = validate_loan_amount(amount)?;
        debug!(loan_amount = %amount, "loan amount updated");
        Ok(())
    }

    pub fn rate(&self) -> RateOption {
        self.rate
    }

    /// set the rate by member name (case-sensitive)
    pub fn set_rate(&mut self, rate: &str) -> Result<()> {
        let option = validate_rate(rate)?;
        self.set_rate_option(option);
        Ok(())
    }

    pub fn set_rate_option(&mut self, rate: RateOption) {
        self.rate = rate;
        debug!(rate = rate.name(), "rate updated");
    }

    pub fn frequency(&self) -> FrequencyOption {
        self.frequency
    }

    /// set the frequency by member name; case is normalized as in `new`
    pub fn set_frequency(&mut self, frequency: &str) -> Result<()> {
        let option = validate_frequency(frequency)?;
        self.set_frequency_option(option);
        Ok(())
    }

    pub fn set_frequency_option(&mut self, frequency: FrequencyOption) {
        self.frequency = frequency;
        debug!(frequency = frequency.name(), "frequency updated");
    }

    pub fn amortization_years(&self) -> u32 {
        self.amortization_years
    }

    pub fn set_amortization_years(&mut self, years: u32) -> Result<()> {
        self.amortization_years = validate_amortization(years)?;
        debug!(amortization_years = years, "amortization updated");
        Ok(())
    }

    pub fn payment_calculator(&self) -> PaymentCalculator {
        PaymentCalculator::from_validated(self.rate, self.frequency, self.amortization_years)
    }

    /// periodic payment, rounded half-up to cents; recomputed on every call
    pub fn calculate_payment(&self) -> Money {
        self.payment_calculator().payment(self.loan_amount)
    }

    /// constructor-like representation, e.g. `Mortgage(682912.43, 0.0599, 12, 10)`
    pub fn repr(&self) -> String {
        format!(
            "Mortgage({}, {}, {}, {})",
            self.loan_amount.round_cents(),
            self.rate.rate().as_decimal(),
            self.frequency.payments_per_year(),
            self.amortization_years,
        )
    }
}

impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mortgage Amount: {}", self.loan_amount.format_currency())?;
        writeln!(f, "Rate: {}", self.rate.rate())?;
        writeln!(f, "Amortization: {}", self.amortization_years)?;
        write!(
            f,
            "Frequency: {} -- Calculated Payment: {}",
            self.frequency.name(),
            self.calculate_payment().format_currency()
        )
    }
}

// shared by `new` and the setters so both enforce the same rules

fn validate_loan_amount(amount: Money) -> Result<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        debug!(loan_amount = %amount, "rejected loan amount");
        Err(MortgageError::InvalidLoanAmount { amount })
    }
}

fn validate_rate(name: &str) -> Result<RateOption> {
    RateOption::by_name(name).ok_or_else(|| {
        debug!(rate = name, "rejected rate");
        MortgageError::InvalidRate {
            name: name.to_string(),
        }
    })
}

fn validate_frequency(name: &str) -> Result<FrequencyOption> {
    FrequencyOption::by_name_ignore_case(name).ok_or_else(|| {
        debug!(frequency = name, "rejected frequency");
        MortgageError::InvalidFrequency {
            name: name.to_string(),
        }
    })
}

pub(crate) fn validate_amortization(years: u32) -> Result<u32> {
    if is_valid_amortization(years) {
        Ok(years)
    } else {
        debug!(amortization_years = years, "rejected amortization");
        Err(MortgageError::InvalidAmortization { years })
    }
}
