//! Shared amortization math: the level-payment formula and the month-step
//! amortizer every calculator builds on.
//!
//! All functions are total. Invalid numeric input is clamped to zero rather
//! than rejected — the calculators fail soft, and the callers surface the
//! clamping through envelope warnings.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent, Years};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Clamping helpers
// ---------------------------------------------------------------------------

/// Clamp a value to the non-negative domain.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Clamp a named input, recording a warning when clamping changed it.
pub fn clamp_input(value: Decimal, field: &str, warnings: &mut Vec<String>) -> Decimal {
    if value < Decimal::ZERO {
        warnings.push(format!("{field} was negative ({value}); treated as 0"));
        Decimal::ZERO
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Rate and period conversions
// ---------------------------------------------------------------------------

/// Number of monthly periods in a (possibly fractional) term, half-up rounded.
pub fn periods(term_years: Years) -> u32 {
    let months = clamp_non_negative(term_years) * MONTHS_PER_YEAR;
    months
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Monthly rate from an annual percentage (6.5 -> 0.065 / 12).
pub fn monthly_rate(annual_rate_pct: Percent) -> Decimal {
    clamp_non_negative(annual_rate_pct) / PERCENT_SCALE / MONTHS_PER_YEAR
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
///
/// Saturates at `Decimal::MAX` instead of overflowing; terms long enough to
/// hit the ceiling have already converged in the payment formula.
pub fn compound(rate: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        match result.checked_mul(factor) {
            Some(next) => result = next,
            None => return Decimal::MAX,
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Level payment
// ---------------------------------------------------------------------------

/// Level monthly principal-and-interest payment for a fixed-rate loan.
///
/// `principal * r * (1+r)^n / ((1+r)^n - 1)`, degrading to straight-line
/// `principal / n` at 0% and to 0 when the principal or term is zero.
pub fn monthly_payment(principal: Money, annual_rate_pct: Percent, term_years: Years) -> Money {
    let principal = clamp_non_negative(principal);
    let n = periods(term_years);

    if principal.is_zero() || n == 0 {
        return Decimal::ZERO;
    }

    let r = monthly_rate(annual_rate_pct);
    if r.is_zero() {
        return principal / Decimal::from(n);
    }

    // Divide before multiplying so a saturated factor stays in range;
    // factor / (factor - 1) tends to 1 as the term grows.
    let factor = compound(r, n);
    let annuity = factor / (factor - Decimal::ONE);
    principal * r * annuity
}

// ---------------------------------------------------------------------------
// Month stepping
// ---------------------------------------------------------------------------

/// Result of walking a loan forward a number of months at a level payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizedSpan {
    /// Balance after the span, floored at zero.
    pub ending_balance: Money,
    /// Principal credited over the span, per the step formula.
    pub principal_paid: Money,
    /// Level payments made over the span.
    pub payments_made: Money,
}

/// Walk a balance forward `months` periods at a fixed level payment.
///
/// Each month: `interest = balance * r`, `principal = max(0, payment - interest)`,
/// `balance = max(0, balance - principal)`. The payment continues at the level
/// amount past payoff; the clamps make post-payoff months principal-only with
/// the balance pinned at zero.
pub fn amortize_months(
    balance: Money,
    payment: Money,
    monthly_rate: Decimal,
    months: u32,
) -> AmortizedSpan {
    let mut balance = clamp_non_negative(balance);
    let mut principal_paid = Decimal::ZERO;
    let mut payments_made = Decimal::ZERO;

    for _ in 0..months {
        let interest = balance * monthly_rate;
        let principal = clamp_non_negative(payment - interest);
        balance = clamp_non_negative(balance - principal);
        principal_paid += principal;
        payments_made += payment;
    }

    AmortizedSpan {
        ending_balance: balance,
        principal_paid,
        payments_made,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
