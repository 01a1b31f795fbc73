use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{MortgageError, Result};
use crate::mortgage::Mortgage;
use crate::types::{FrequencyOption, RateOption};

/// mortgage configuration as supplied by a caller or a JSON document
///
/// Rate and frequency are kept as the raw member names so that building
/// goes through the same validation as [`Mortgage::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageConfig {
    pub loan_amount: Money,
    pub rate: String,
    pub frequency: String,
    pub amortization_years: u32,
}

impl MortgageConfig {
    /// parse a configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MortgageError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// validate and build the mortgage
    pub fn build(&self) -> Result<Mortgage> {
        Mortgage::new(
            self.loan_amount,
            &self.rate,
            &self.frequency,
            self.amortization_years,
        )
    }
}

impl From<&Mortgage> for MortgageConfig {
    fn from(mortgage: &Mortgage) -> Self {
        MortgageConfig {
            loan_amount: mortgage.loan_amount(),
            rate: mortgage.rate().name().to_string(),
            frequency: mortgage.frequency().name().to_string(),
            amortization_years: mortgage.amortization_years(),
        }
    }
}

/// fluent builder for mortgages; every field is required
#[derive(Debug, Clone, Default)]
pub struct MortgageBuilder {
    loan_amount: Option<Money>,
    rate: Option<String>,
    frequency: Option<String>,
    amortization_years: Option<u32>,
}

impl MortgageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loan_amount(mut self, amount: Money) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    pub fn rate(mut self, rate: impl Into<String>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn rate_option(self, rate: RateOption) -> Self {
        self.rate(rate.name())
    }

    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn frequency_option(self, frequency: FrequencyOption) -> Self {
        self.frequency(frequency.name())
    }

    pub fn amortization_years(mut self, years: u32) -> Self {
        self.amortization_years = Some(years);
        self
    }

    pub fn build(self) -> Result<Mortgage> {
        let config = MortgageConfig {
            loan_amount: self.loan_amount.ok_or_else(|| missing("loan_amount"))?,
            rate: self.rate.ok_or_else(|| missing("rate"))?,
            frequency: self.frequency.ok_or_else(|| missing("frequency"))?,
            amortization_years: self
                .amortization_years
                .ok_or_else(|| missing("amortization_years"))?,
        };
        config.build()
    }
}

fn missing(field: &str) -> MortgageError {
    MortgageError::InvalidConfiguration {
        message: format!("missing field `{}`", field),
    }
}
