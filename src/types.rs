use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Rate;
use crate::errors::MortgageError;

/// amortization periods, in years, a mortgage may be scheduled over
pub const VALID_AMORTIZATION_YEARS: [u32; 6] = [5, 10, 15, 20, 25, 30];

pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION_YEARS.contains(&years)
}

/// permitted nominal annual rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateOption {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl RateOption {
    pub const ALL: [RateOption; 6] = [
        RateOption::Fixed5,
        RateOption::Fixed3,
        RateOption::Fixed1,
        RateOption::Variable5,
        RateOption::Variable3,
        RateOption::Variable1,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RateOption::Fixed5 => "FIXED_5",
            RateOption::Fixed3 => "FIXED_3",
            RateOption::Fixed1 => "FIXED_1",
            RateOption::Variable5 => "VARIABLE_5",
            RateOption::Variable3 => "VARIABLE_3",
            RateOption::Variable1 => "VARIABLE_1",
        }
    }

    /// annual rate as a fraction
    pub fn rate(&self) -> Rate {
        match self {
            RateOption::Fixed5 => Rate::from_decimal(dec!(0.0519)),
            RateOption::Fixed3 => Rate::from_decimal(dec!(0.0589)),
            RateOption::Fixed1 => Rate::from_decimal(dec!(0.0599)),
            RateOption::Variable5 => Rate::from_decimal(dec!(0.0649)),
            RateOption::Variable3 => Rate::from_decimal(dec!(0.0669)),
            RateOption::Variable1 => Rate::from_decimal(dec!(0.0679)),
        }
    }

    /// exact, case-sensitive lookup by member name
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.name() == name)
    }
}

impl fmt::Display for RateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateOption {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RateOption::by_name(s).ok_or_else(|| MortgageError::InvalidRate {
            name: s.to_string(),
        })
    }
}

/// payment frequencies, as payments per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrequencyOption {
    Monthly,
    BiWeekly,
    Weekly,
}

impl FrequencyOption {
    pub const ALL: [FrequencyOption; 3] = [
        FrequencyOption::Monthly,
        FrequencyOption::BiWeekly,
        FrequencyOption::Weekly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FrequencyOption::Monthly => "MONTHLY",
            FrequencyOption::BiWeekly => "BI_WEEKLY",
            FrequencyOption::Weekly => "WEEKLY",
        }
    }

    pub fn payments_per_year(&self) -> u32 {
        match self {
            FrequencyOption::Monthly => 12,
            FrequencyOption::BiWeekly => 26,
            FrequencyOption::Weekly => 52,
        }
    }

    /// exact lookup by member name; callers normalize case first
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.name() == name)
    }

    /// lookup after upper-casing, so `"monthly"` and `"Bi_Weekly"` resolve
    pub fn by_name_ignore_case(name: &str) -> Option<Self> {
        Self::by_name(&name.to_uppercase())
    }
}

impl fmt::Display for FrequencyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrequencyOption {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrequencyOption::by_name_ignore_case(s).ok_or_else(|| MortgageError::InvalidFrequency {
            name: s.to_string(),
        })
    }
}
