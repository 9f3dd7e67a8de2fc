use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::buydown::{self, BuydownInput, BuydownMode};

use crate::input;

/// Arguments for a rate buydown schedule
#[derive(Args)]
pub struct BuydownArgs {
    /// Loan amount being financed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Note rate as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in years
    #[arg(long, default_value = "30")]
    pub term: Decimal,

    /// Buydown structure: "none" or "temporary-2-1"
    #[arg(long, default_value = "temporary-2-1")]
    pub mode: String,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_buydown(args: BuydownArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bd_input: BuydownInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let mode: BuydownMode = args.mode.parse()?;
        BuydownInput {
            loan_amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            base_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.term,
            mode,
        }
    };

    let result = buydown::analyze_buydown(&bd_input);
    Ok(serde_json::to_value(result)?)
}
