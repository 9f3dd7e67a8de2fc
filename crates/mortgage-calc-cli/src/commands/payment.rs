use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use mortgage_calc_core::amortization::{monthly_payment, periods};

/// Arguments for a bare monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual rate as a percentage (6.5 = 6.5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in years
    #[arg(long)]
    pub term: Decimal,
}

#[derive(Serialize)]
struct PaymentSummary {
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_years: Decimal,
    periods: u32,
    monthly_payment: Decimal,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let summary = PaymentSummary {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_years: args.term,
        periods: periods(args.term),
        monthly_payment: monthly_payment(args.principal, args.rate, args.term),
    };
    Ok(serde_json::to_value(summary)?)
}
