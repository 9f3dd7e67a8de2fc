use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::reverse::{self, ReverseMortgageInput};

use crate::input;

/// Arguments for a reverse mortgage estimate
#[derive(Args)]
pub struct ReverseArgs {
    /// Age of the youngest borrower
    #[arg(long)]
    pub age: Option<Decimal>,

    /// Appraised home value
    #[arg(long)]
    pub value: Option<Decimal>,

    /// Balance still owed on the existing mortgage
    #[arg(long, default_value = "0")]
    pub balance: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_reverse(args: ReverseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rm_input: ReverseMortgageInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ReverseMortgageInput {
            borrower_age: args.age.ok_or("--age is required (or provide --input)")?,
            home_value: args.value.ok_or("--value is required (or provide --input)")?,
            current_mortgage_balance: args.balance,
        }
    };

    let result = reverse::analyze_reverse_mortgage(&rm_input);
    Ok(serde_json::to_value(result)?)
}
