use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("Loan Amount must be positive.")]
    InvalidLoanAmount {
        amount: Money,
    },

    #[error("Rate provided is invalid.")]
    InvalidRate {
        name: String,
    },

    #[error("Frequency provided is invalid.")]
    InvalidFrequency {
        name: String,
    },

    #[error("Amortization provided is invalid.")]
    InvalidAmortization {
        years: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, MortgageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        let cases = [
            (
                MortgageError::InvalidLoanAmount { amount: Money::from_major(-2) },
                "Loan Amount must be positive.",
            ),
            (
                MortgageError::InvalidRate { name: "INVALID_RATE".to_string() },
                "Rate provided is invalid.",
            ),
            (
                MortgageError::InvalidFrequency { name: "DAILY".to_string() },
                "Frequency provided is invalid.",
            ),
            (
                MortgageError::InvalidAmortization { years: 100 },
                "Amortization provided is invalid.",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_configuration_message_carries_detail() {
        let error = MortgageError::InvalidConfiguration {
            message: "missing field `rate`".to_string(),
        };
        assert_eq!(error.to_string(), "invalid configuration: missing field `rate`");
    }
}
