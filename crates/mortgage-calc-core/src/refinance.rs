//! Refinance break-even: how many months of payment savings it takes to
//! recover the closing costs of a rate-and-term refinance.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{clamp_input, monthly_payment, periods};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a refinance break-even analysis.
///
/// Both payments are computed over the same `term_years` — a deliberate
/// simplification; there is no separate remaining-term concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceInput {
    /// Outstanding balance being refinanced.
    pub current_balance: Money,
    /// Current note rate as a percentage.
    pub current_rate_pct: Percent,
    /// Offered refinance rate as a percentage.
    pub new_rate_pct: Percent,
    /// Term in years, applied to both loans.
    pub term_years: Years,
    /// Closing costs of the refinance.
    pub closing_costs: Money,
}

/// Refinance break-even results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceOutput {
    /// Monthly P&I at the current rate.
    pub current_payment: Money,
    /// Monthly P&I at the new rate.
    pub new_payment: Money,
    /// current_payment - new_payment; negative when the new rate is worse.
    pub monthly_savings: Money,
    /// Months to recover closing costs. None when there are no savings.
    pub break_even_months: Option<u32>,
    /// Savings over the full shared term, net of closing costs.
    pub lifetime_savings: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compare the current loan against a refinance offer over a shared term.
pub fn analyze_refinance(input: &RefinanceInput) -> ComputationOutput<RefinanceOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let balance = clamp_input(input.current_balance, "current_balance", &mut warnings);
    let closing_costs = clamp_input(input.closing_costs, "closing_costs", &mut warnings);
    let current_rate_pct = clamp_input(input.current_rate_pct, "current_rate_pct", &mut warnings);
    let new_rate_pct = clamp_input(input.new_rate_pct, "new_rate_pct", &mut warnings);
    let term_years = clamp_input(input.term_years, "term_years", &mut warnings);

    let current_payment = monthly_payment(balance, current_rate_pct, term_years);
    let new_payment = monthly_payment(balance, new_rate_pct, term_years);
    let monthly_savings = current_payment - new_payment;

    let break_even_months = if monthly_savings > Decimal::ZERO {
        let months = (closing_costs / monthly_savings).ceil();
        months.to_u32()
    } else {
        warnings.push("no monthly savings at the offered rate; break-even not applicable".into());
        None
    };

    let n = Decimal::from(periods(term_years));
    let lifetime_savings = monthly_savings * n - closing_costs;

    let output = RefinanceOutput {
        current_payment,
        new_payment,
        monthly_savings,
        break_even_months,
        lifetime_savings,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Refinance Break-Even (shared-term comparison)",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
