//! Rent vs. buy projector: a year-by-year simulation comparing cumulative
//! rent paid against the net cost of owning, under fixed purchase
//! assumptions (20% down, 6.5% over 30 years, 1%/yr tax and maintenance).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{
    amortize_months, clamp_input, clamp_non_negative, monthly_payment, monthly_rate,
};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};

/// Fixed down payment fraction of the purchase price.
const DOWN_PAYMENT_FRACTION: Decimal = dec!(0.20);

/// Fixed mortgage rate assumption, as a percentage.
const MORTGAGE_RATE_PCT: Decimal = dec!(6.5);

/// Fixed mortgage term assumption.
const TERM_YEARS: Decimal = dec!(30);

/// Annual property tax, as a fraction of the current year's home value.
const PROPERTY_TAX_FRACTION: Decimal = dec!(0.01);

/// Annual maintenance, as a fraction of the current year's home value.
const MAINTENANCE_FRACTION: Decimal = dec!(0.01);

/// Simulation horizon bounds in years.
const MIN_YEARS: u32 = 1;
const MAX_YEARS: u32 = 50;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a rent-vs-buy projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsBuyInput {
    /// Purchase price of the home being considered.
    pub home_price: Money,
    /// Current monthly rent for the alternative.
    pub monthly_rent: Money,
    /// Horizon in years; rounded and clamped to [1, 50].
    pub duration_years: Years,
    /// Annual home appreciation as a percentage.
    pub appreciation_rate_pct: Percent,
    /// Annual rent inflation as a percentage.
    pub rent_inflation_pct: Percent,
}

/// One simulated year of the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year number, 1-indexed and strictly increasing.
    pub year: u32,
    /// Total rent paid through this year.
    pub cumulative_rent_cost: Money,
    /// Net cost of owning through this year: cash out minus equity, floored
    /// at zero.
    pub cumulative_net_buy_cost: Money,
}

/// Rent-vs-buy projection results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsBuyOutput {
    /// One point per simulated year, in year order.
    pub points: Vec<ProjectionPoint>,
    /// First year where owning costs no more than renting. None when the
    /// horizon ends without a crossing.
    pub crossover_year: Option<u32>,
    /// Assumed down payment (20% of price).
    pub down_payment: Money,
    /// Assumed financed amount.
    pub loan_amount: Money,
    /// Level monthly P&I under the fixed assumptions.
    pub monthly_mortgage_payment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project cumulative renting cost against net buying cost year by year.
pub fn analyze_rent_vs_buy(input: &RentVsBuyInput) -> ComputationOutput<RentVsBuyOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let home_price = clamp_input(input.home_price, "home_price", &mut warnings);
    let initial_rent = clamp_input(input.monthly_rent, "monthly_rent", &mut warnings);
    let appreciation =
        clamp_input(input.appreciation_rate_pct, "appreciation_rate_pct", &mut warnings)
            / PERCENT_SCALE;
    let rent_inflation =
        clamp_input(input.rent_inflation_pct, "rent_inflation_pct", &mut warnings) / PERCENT_SCALE;

    let years = horizon_years(input.duration_years, &mut warnings);

    let down_payment = home_price * DOWN_PAYMENT_FRACTION;
    let loan_amount = home_price - down_payment;
    let payment = monthly_payment(loan_amount, MORTGAGE_RATE_PCT, TERM_YEARS);
    let rate = monthly_rate(MORTGAGE_RATE_PCT);

    // State carried across the whole simulation, never reset per year.
    let mut balance = loan_amount;
    let mut cumulative_principal = Decimal::ZERO;
    let mut cumulative_payments = Decimal::ZERO;
    let mut cumulative_tax = Decimal::ZERO;
    let mut cumulative_maintenance = Decimal::ZERO;
    let mut cumulative_rent = Decimal::ZERO;

    // Year-1 values; grown geometrically at each year boundary.
    let mut home_value = home_price;
    let mut rent = initial_rent;

    let mut points = Vec::with_capacity(years as usize);
    let mut crossover_year: Option<u32> = None;

    for year in 1..=years {
        cumulative_rent += rent * MONTHS_PER_YEAR;

        let span = amortize_months(balance, payment, rate, 12);
        balance = span.ending_balance;
        cumulative_principal += span.principal_paid;
        cumulative_payments += span.payments_made;

        // Tax and maintenance on this year's value, not the original price.
        cumulative_tax += home_value * PROPERTY_TAX_FRACTION;
        cumulative_maintenance += home_value * MAINTENANCE_FRACTION;

        let equity = down_payment
            + cumulative_principal
            + clamp_non_negative(home_value - home_price);
        let cash_out =
            down_payment + cumulative_payments + cumulative_tax + cumulative_maintenance;
        let net_buy_cost = clamp_non_negative(cash_out - equity);

        // First crossing only.
        if crossover_year.is_none() && net_buy_cost <= cumulative_rent {
            crossover_year = Some(year);
        }

        points.push(ProjectionPoint {
            year,
            cumulative_rent_cost: cumulative_rent,
            cumulative_net_buy_cost: net_buy_cost,
        });

        home_value *= Decimal::ONE + appreciation;
        rent *= Decimal::ONE + rent_inflation;
    }

    let output = RentVsBuyOutput {
        points,
        crossover_year,
        down_payment,
        loan_amount,
        monthly_mortgage_payment: payment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Rent vs Buy Projection (20% down, 6.5%/30yr, 1% tax + 1% maintenance)",
        input,
        warnings,
        elapsed,
        output,
    )
}

/// Round the requested horizon to whole years and clamp to [1, 50].
fn horizon_years(duration_years: Years, warnings: &mut Vec<String>) -> u32 {
    let rounded = clamp_non_negative(duration_years)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(MIN_YEARS);

    if rounded < MIN_YEARS {
        warnings.push(format!("duration_years clamped up to {MIN_YEARS}"));
        MIN_YEARS
    } else if rounded > MAX_YEARS {
        warnings.push(format!("duration_years clamped down to {MAX_YEARS}"));
        MAX_YEARS
    } else {
        rounded
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
