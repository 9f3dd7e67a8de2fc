use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::refinance::{self, RefinanceInput};

use crate::input;

/// Arguments for a refinance break-even analysis
#[derive(Args)]
pub struct RefinanceArgs {
    /// Outstanding balance being refinanced
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Current rate as a percentage
    #[arg(long)]
    pub current_rate: Option<Decimal>,

    /// Offered refinance rate as a percentage
    #[arg(long)]
    pub new_rate: Option<Decimal>,

    /// Term in years, applied to both loans
    #[arg(long, default_value = "30")]
    pub term: Decimal,

    /// Closing costs of the refinance
    #[arg(long, default_value = "0")]
    pub closing_costs: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_refinance(args: RefinanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let refi_input: RefinanceInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RefinanceInput {
            current_balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            current_rate_pct: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            new_rate_pct: args
                .new_rate
                .ok_or("--new-rate is required (or provide --input)")?,
            term_years: args.term,
            closing_costs: args.closing_costs,
        }
    };

    let result = refinance::analyze_refinance(&refi_input);
    Ok(serde_json::to_value(result)?)
}
