use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use mortgage_calc_core::purchase::{self, PurchaseInput};

use crate::input;

/// Arguments for a purchase payment breakdown
#[derive(Args)]
pub struct PurchaseArgs {
    /// Home price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub down: Option<Decimal>,

    /// Annual rate as a percentage (6.5 = 6.5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in years
    #[arg(long, default_value = "30")]
    pub term: Decimal,

    /// Annual property tax
    #[arg(long, default_value = "0")]
    pub tax: Decimal,

    /// Annual homeowners insurance
    #[arg(long, default_value = "0")]
    pub insurance: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_purchase(args: PurchaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let purchase_input: PurchaseInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PurchaseInput {
            home_price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: args.down.unwrap_or(dec!(0)),
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.term,
            annual_property_tax: args.tax,
            annual_home_insurance: args.insurance,
        }
    };

    let result = purchase::analyze_purchase(&purchase_input);
    Ok(serde_json::to_value(result)?)
}
