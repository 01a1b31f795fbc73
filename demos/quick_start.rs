/// quick start - build a mortgage and print its payment
use mortgage_rs::{Money, Mortgage, MortgageConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // a $682,912.43 mortgage at the 1-year fixed rate, paid monthly over 10 years
    let mut mortgage = Mortgage::new(Money::from_str_exact("682912.43")?, "FIXED_1", "MONTHLY", 10)?;

    println!("{}", mortgage);
    println!("{}", mortgage.repr());

    // switch to weekly payments
    mortgage.set_frequency("weekly")?;
    println!("weekly payment: {}", mortgage.calculate_payment().format_currency());

    // rejected inputs leave the mortgage untouched
    if let Err(e) = mortgage.set_amortization_years(100) {
        println!("rejected: {}", e);
    }

    // same mortgage from a configuration document
    let config = MortgageConfig::from_json(
        r#"{ "loan_amount": "682912.43", "rate": "FIXED_1", "frequency": "MONTHLY", "amortization_years": 10 }"#,
    )?;
    println!("{}", config.build()?.json());

    Ok(())
}
