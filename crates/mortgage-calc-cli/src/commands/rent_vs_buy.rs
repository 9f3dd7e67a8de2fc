use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::rent_vs_buy::{self, RentVsBuyInput};

use crate::input;

/// Arguments for a rent-vs-buy projection
#[derive(Args)]
pub struct RentVsBuyArgs {
    /// Purchase price of the home being considered
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Current monthly rent
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Horizon in years (clamped to 1-50)
    #[arg(long, default_value = "10")]
    pub years: Decimal,

    /// Annual home appreciation as a percentage
    #[arg(long, default_value = "3")]
    pub appreciation: Decimal,

    /// Annual rent inflation as a percentage
    #[arg(long, default_value = "3")]
    pub rent_inflation: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_rent_vs_buy(args: RentVsBuyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rvb_input: RentVsBuyInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RentVsBuyInput {
            home_price: args.price.ok_or("--price is required (or provide --input)")?,
            monthly_rent: args.rent.ok_or("--rent is required (or provide --input)")?,
            duration_years: args.years,
            appreciation_rate_pct: args.appreciation,
            rent_inflation_pct: args.rent_inflation,
        }
    };

    let result = rent_vs_buy::analyze_rent_vs_buy(&rvb_input);
    Ok(serde_json::to_value(result)?)
}
