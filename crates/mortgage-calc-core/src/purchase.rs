//! Purchase payment breakdown: principal & interest plus monthly tax and
//! insurance escrow on a home purchase.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{clamp_input, clamp_non_negative, monthly_payment};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a purchase payment breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseInput {
    /// Contract price of the home.
    pub home_price: Money,
    /// Cash down payment.
    pub down_payment: Money,
    /// Annual note rate as a percentage (6.5 = 6.5%).
    pub annual_rate_pct: Percent,
    /// Loan term in years.
    pub term_years: Years,
    /// Annual property tax bill.
    pub annual_property_tax: Money,
    /// Annual homeowners insurance premium.
    pub annual_home_insurance: Money,
}

/// Monthly payment breakdown for a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOutput {
    /// Financed amount: max(0, price - down payment).
    pub loan_amount: Money,
    /// Level monthly principal & interest.
    pub monthly_principal_interest: Money,
    /// Property tax escrow per month.
    pub monthly_tax: Money,
    /// Insurance escrow per month.
    pub monthly_insurance: Money,
    /// Total monthly payment (P&I + tax + insurance).
    pub total_monthly_payment: Money,
    /// Loan-to-value as a percentage of the home price.
    pub ltv_pct: Percent,
    /// Down payment as a percentage of the home price.
    pub down_payment_pct: Percent,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Break a purchase down into its monthly payment components.
pub fn analyze_purchase(input: &PurchaseInput) -> ComputationOutput<PurchaseOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let home_price = clamp_input(input.home_price, "home_price", &mut warnings);
    let down_payment = clamp_input(input.down_payment, "down_payment", &mut warnings);
    let annual_tax = clamp_input(input.annual_property_tax, "annual_property_tax", &mut warnings);
    let annual_insurance = clamp_input(
        input.annual_home_insurance,
        "annual_home_insurance",
        &mut warnings,
    );
    let annual_rate_pct = clamp_input(input.annual_rate_pct, "annual_rate_pct", &mut warnings);
    let term_years = clamp_input(input.term_years, "term_years", &mut warnings);

    if down_payment > home_price {
        warnings.push("down_payment exceeds home_price; loan amount is 0".into());
    }

    let loan_amount = clamp_non_negative(home_price - down_payment);
    let monthly_principal_interest = monthly_payment(loan_amount, annual_rate_pct, term_years);
    let monthly_tax = annual_tax / MONTHS_PER_YEAR;
    let monthly_insurance = annual_insurance / MONTHS_PER_YEAR;
    let total_monthly_payment = monthly_principal_interest + monthly_tax + monthly_insurance;

    let (ltv_pct, down_payment_pct) = if home_price.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            loan_amount / home_price * PERCENT_SCALE,
            down_payment / home_price * PERCENT_SCALE,
        )
    };

    let output = PurchaseOutput {
        loan_amount,
        monthly_principal_interest,
        monthly_tax,
        monthly_insurance,
        total_monthly_payment,
        ltv_pct,
        down_payment_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Purchase Payment Breakdown (P&I + Escrow)",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
