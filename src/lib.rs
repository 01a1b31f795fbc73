pub mod config;
pub mod decimal;
pub mod errors;
pub mod mortgage;
pub mod payments;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{MortgageBuilder, MortgageConfig};
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use mortgage::Mortgage;
pub use payments::PaymentCalculator;
pub use serialization::MortgageView;
pub use types::{is_valid_amortization, FrequencyOption, RateOption, VALID_AMORTIZATION_YEARS};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
