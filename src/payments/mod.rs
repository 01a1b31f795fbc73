pub mod amortization;

pub use amortization::PaymentCalculator;
