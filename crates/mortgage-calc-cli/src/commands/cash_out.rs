use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::cash_out::{self, CashOutInput};

use crate::input;

/// Arguments for cash-out refinance sizing
#[derive(Args)]
pub struct CashOutArgs {
    /// Current home value
    #[arg(long)]
    pub value: Option<Decimal>,

    /// Balance on the existing mortgage
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Cash the borrower wants to take out
    #[arg(long)]
    pub cash: Option<Decimal>,

    /// Rate on the new loan as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_cash_out(args: CashOutArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let co_input: CashOutInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CashOutInput {
            home_value: args.value.ok_or("--value is required (or provide --input)")?,
            existing_balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            desired_cash_out: args.cash.ok_or("--cash is required (or provide --input)")?,
            new_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
        }
    };

    let result = cash_out::analyze_cash_out(&co_input);
    Ok(serde_json::to_value(result)?)
}
