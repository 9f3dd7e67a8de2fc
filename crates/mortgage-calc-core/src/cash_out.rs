//! Cash-out refinance: cap the cash drawn at 80% LTV and price the new loan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{clamp_input, clamp_non_negative, monthly_payment};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

/// Maximum loan-to-value after the cash-out.
const MAX_LTV: Decimal = dec!(0.80);

/// The new loan is always priced over a 30-year term.
const CASH_OUT_TERM_YEARS: Decimal = dec!(30);

const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a cash-out refinance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashOutInput {
    /// Current home value.
    pub home_value: Money,
    /// Balance on the existing mortgage.
    pub existing_balance: Money,
    /// Cash the borrower wants to take out.
    pub desired_cash_out: Money,
    /// Rate on the new loan as a percentage.
    pub new_rate_pct: Percent,
}

/// Cash-out refinance results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashOutOutput {
    /// Largest allowed loan: home_value * 80%.
    pub max_loan: Money,
    /// Cash available under the cap, floored at zero.
    pub max_cash_out: Money,
    /// Cash actually drawn: min(desired, max).
    pub actual_cash_out: Money,
    /// True when the desired amount was silently reduced to the cap.
    pub was_capped: bool,
    /// Existing balance plus the cash drawn.
    pub new_loan: Money,
    /// Monthly P&I on the new loan over 30 years.
    pub new_monthly_payment: Money,
    /// New loan as a percentage of home value.
    pub ltv_pct: Percent,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Size a cash-out refinance against the 80% LTV cap.
pub fn analyze_cash_out(input: &CashOutInput) -> ComputationOutput<CashOutOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let home_value = clamp_input(input.home_value, "home_value", &mut warnings);
    let existing_balance = clamp_input(input.existing_balance, "existing_balance", &mut warnings);
    let desired_cash_out = clamp_input(input.desired_cash_out, "desired_cash_out", &mut warnings);
    let new_rate_pct = clamp_input(input.new_rate_pct, "new_rate_pct", &mut warnings);

    let max_loan = home_value * MAX_LTV;
    let max_cash_out = clamp_non_negative(max_loan - existing_balance);
    let was_capped = desired_cash_out > max_cash_out;
    let actual_cash_out = desired_cash_out.min(max_cash_out);

    if was_capped {
        warnings.push(format!(
            "desired_cash_out {desired_cash_out} exceeds the amount available at 80% LTV; capped at {max_cash_out}"
        ));
    }

    let new_loan = existing_balance + actual_cash_out;
    let new_monthly_payment = monthly_payment(new_loan, new_rate_pct, CASH_OUT_TERM_YEARS);

    let ltv_pct = if home_value.is_zero() {
        Decimal::ZERO
    } else {
        new_loan / home_value * PERCENT_SCALE
    };

    let output = CashOutOutput {
        max_loan,
        max_cash_out,
        actual_cash_out,
        was_capped,
        new_loan,
        new_monthly_payment,
        ltv_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Cash-Out Refinance (80% LTV cap, 30-year pricing)",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TOL: Decimal = dec!(0.01);

    fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "{}: expected ~{}, got {} (diff = {})",
            msg,
            expected,
            actual,
            diff
        );
    }

    fn standard_input() -> CashOutInput {
        CashOutInput {
            home_value: dec!(500000),
            existing_balance: dec!(250000),
            desired_cash_out: dec!(100000),
            new_rate_pct: dec!(6.5),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Under the cap: full amount drawn, no flag
    // -----------------------------------------------------------------------
    #[test]
    fn test_under_cap() {
        let out = analyze_cash_out(&standard_input()).result;
        assert_eq!(out.max_loan, dec!(400000));
        assert_eq!(out.max_cash_out, dec!(150000));
        assert_eq!(out.actual_cash_out, dec!(100000));
        assert!(!out.was_capped);
        assert_eq!(out.new_loan, dec!(350000));
    }

    // -----------------------------------------------------------------------
    // 2. Over the cap: drawn amount capped, flag set
    // -----------------------------------------------------------------------
    #[test]
    fn test_over_cap() {
        let input = CashOutInput {
            desired_cash_out: dec!(200000),
            ..standard_input()
        };
        let out = analyze_cash_out(&input);
        assert!(out.result.was_capped);
        assert_eq!(out.result.actual_cash_out, dec!(150000));
        assert_eq!(out.result.new_loan, dec!(400000));
        assert!(out.warnings.iter().any(|w| w.contains("capped")));
    }

    // -----------------------------------------------------------------------
    // 3. Exactly at the cap counts as uncapped
    // -----------------------------------------------------------------------
    #[test]
    fn test_exactly_at_cap() {
        let input = CashOutInput {
            desired_cash_out: dec!(150000),
            ..standard_input()
        };
        let out = analyze_cash_out(&input).result;
        assert!(!out.was_capped);
        assert_eq!(out.actual_cash_out, dec!(150000));
    }

    // -----------------------------------------------------------------------
    // 4. Balance already above 80% LTV leaves nothing to draw
    // -----------------------------------------------------------------------
    #[test]
    fn test_no_headroom() {
        let input = CashOutInput {
            existing_balance: dec!(450000),
            ..standard_input()
        };
        let out = analyze_cash_out(&input).result;
        assert_eq!(out.max_cash_out, Decimal::ZERO);
        assert_eq!(out.actual_cash_out, Decimal::ZERO);
        assert!(out.was_capped);
        assert_eq!(out.new_loan, dec!(450000));
    }

    // -----------------------------------------------------------------------
    // 5. New payment and LTV follow the new loan
    // -----------------------------------------------------------------------
    #[test]
    fn test_new_payment_and_ltv() {
        let out = analyze_cash_out(&standard_input()).result;
        assert_close(
            out.new_monthly_payment,
            monthly_payment(dec!(350000), dec!(6.5), dec!(30)),
            TOL,
            "priced over a fixed 30-year term",
        );
        assert_close(out.ltv_pct, dec!(70), TOL, "350k / 500k");
    }

    // -----------------------------------------------------------------------
    // 6. Zero home value degrades to zeros, not a failure
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_home_value() {
        let input = CashOutInput {
            home_value: dec!(0),
            existing_balance: dec!(0),
            desired_cash_out: dec!(50000),
            new_rate_pct: dec!(6.5),
        };
        let out = analyze_cash_out(&input).result;
        assert_eq!(out.max_loan, Decimal::ZERO);
        assert_eq!(out.actual_cash_out, Decimal::ZERO);
        assert_eq!(out.ltv_pct, Decimal::ZERO);
        assert!(out.was_capped);
    }

    // -----------------------------------------------------------------------
    // 7. A negative new rate clamps to 0% with a warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_new_rate_warns_and_clamps() {
        let input = CashOutInput {
            new_rate_pct: dec!(-6.5),
            ..standard_input()
        };
        let out = analyze_cash_out(&input);
        assert!(out.warnings.iter().any(|w| w.contains("new_rate_pct")));
        // 350000 over 360 periods at the clamped 0%.
        assert_close(
            out.result.new_monthly_payment,
            dec!(972.22),
            TOL,
            "straight-line at the clamped rate",
        );
    }
}
