use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::json;

use pixell_mortgage_core::Mortgage;

#[derive(Debug, Clone, ValueEnum)]
pub enum PaymentOutput {
    Text,
    Json,
}

#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal (e.g. 682912.43)
    #[arg(long)]
    pub amount: Decimal,

    /// Rate code (e.g. FIXED_5)
    #[arg(long)]
    pub rate: String,

    /// Payment frequency name (e.g. MONTHLY)
    #[arg(long)]
    pub frequency: String,

    /// Amortization period in years
    #[arg(long)]
    pub amortization: u32,

    /// Output format
    #[arg(long, default_value = "text")]
    pub output: PaymentOutput,
}

/// Validate a single mortgage from flags and print its statement or a
/// JSON object with the resolved fields and computed payment.
pub fn run_payment(args: PaymentArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mortgage = Mortgage::new(args.amount, &args.rate, &args.frequency, args.amortization)?;

    match args.output {
        PaymentOutput::Text => println!("{mortgage}"),
        PaymentOutput::Json => {
            let value = json!({
                "loan_amount": mortgage.loan_amount(),
                "rate": mortgage.rate().name(),
                "annual_rate": mortgage.rate().annual_rate(),
                "frequency": mortgage.frequency().name(),
                "payments_per_year": mortgage.frequency().payments_per_year(),
                "amortization": mortgage.amortization(),
                "payment": mortgage.calculate_payment(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
