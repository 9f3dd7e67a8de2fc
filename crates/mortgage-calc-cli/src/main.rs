mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::buydown::BuydownArgs;
use commands::cash_out::CashOutArgs;
use commands::payment::PaymentArgs;
use commands::purchase::PurchaseArgs;
use commands::refinance::RefinanceArgs;
use commands::rent_vs_buy::RentVsBuyArgs;
use commands::reverse::ReverseArgs;

/// Decimal-precision mortgage calculators
#[derive(Parser)]
#[command(
    name = "mcalc",
    version,
    about = "Decimal-precision mortgage calculators",
    long_about = "A CLI for the mortgage calculator suite: purchase payment \
                  breakdowns, refinance break-even, rent-vs-buy projections, \
                  cash-out refinance sizing, rate buydown schedules, and \
                  reverse mortgage estimates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Level monthly principal & interest payment
    Payment(PaymentArgs),
    /// Purchase payment breakdown (P&I + tax + insurance)
    Purchase(PurchaseArgs),
    /// Refinance break-even analysis
    Refinance(RefinanceArgs),
    /// Rent vs buy projection over a multi-year horizon
    RentVsBuy(RentVsBuyArgs),
    /// Cash-out refinance sizing against the 80% LTV cap
    CashOut(CashOutArgs),
    /// Rate buydown payment schedule
    Buydown(BuydownArgs),
    /// Reverse mortgage principal limit estimate
    Reverse(ReverseArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Purchase(args) => commands::purchase::run_purchase(args),
        Commands::Refinance(args) => commands::refinance::run_refinance(args),
        Commands::RentVsBuy(args) => commands::rent_vs_buy::run_rent_vs_buy(args),
        Commands::CashOut(args) => commands::cash_out::run_cash_out(args),
        Commands::Buydown(args) => commands::buydown::run_buydown(args),
        Commands::Reverse(args) => commands::reverse::run_reverse(args),
        Commands::Version => {
            println!("mcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
