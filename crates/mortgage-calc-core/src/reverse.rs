//! Reverse mortgage estimator: an age-driven principal limit as an
//! illustrative percentage of home value. Not a HUD/HECM calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{clamp_input, clamp_non_negative};
use crate::types::{with_metadata, ComputationOutput, Money};

/// Minimum qualifying age.
const ELIGIBLE_AGE: Decimal = dec!(62);

/// Ages above this no longer increase the availability percentage.
const AGE_CAP: Decimal = dec!(95);

/// Upper bound for the age input itself.
const MAX_AGE: Decimal = dec!(120);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a reverse mortgage estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseMortgageInput {
    /// Age of the youngest borrower.
    pub borrower_age: Decimal,
    /// Appraised home value.
    pub home_value: Money,
    /// Balance still owed on the existing mortgage.
    pub current_mortgage_balance: Money,
}

/// Reverse mortgage estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseMortgageOutput {
    /// Whether the borrower meets the minimum age.
    pub eligible: bool,
    /// Fraction of home value available (0.35-0.60 once eligible).
    pub availability_pct: Decimal,
    /// home_value * availability_pct; zero when ineligible.
    pub gross_principal_limit: Money,
    /// Gross limit net of the existing balance, floored at zero.
    pub net_principal_limit: Money,
}

// ---------------------------------------------------------------------------
// Availability curve
// ---------------------------------------------------------------------------

/// Availability percentage by borrower age, interpolated linearly within
/// each band. The bands are deliberately discontinuous at 69/70 (0.40 jumps
/// to 0.45) to reproduce the published curve exactly.
pub fn availability_pct(age: Decimal) -> Decimal {
    let age = clamp_non_negative(age).min(MAX_AGE);

    if age < ELIGIBLE_AGE {
        Decimal::ZERO
    } else if age < dec!(70) {
        dec!(0.35) + dec!(0.05) * (age - dec!(62)) / dec!(7)
    } else if age < dec!(80) {
        dec!(0.45) + dec!(0.05) * (age - dec!(70)) / dec!(9)
    } else {
        dec!(0.55) + dec!(0.05) * (age.min(AGE_CAP) - dec!(80)) / dec!(15)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate gross and net principal limits for a reverse mortgage.
pub fn analyze_reverse_mortgage(
    input: &ReverseMortgageInput,
) -> ComputationOutput<ReverseMortgageOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let age = clamp_input(input.borrower_age, "borrower_age", &mut warnings);
    let home_value = clamp_input(input.home_value, "home_value", &mut warnings);
    let balance = clamp_input(
        input.current_mortgage_balance,
        "current_mortgage_balance",
        &mut warnings,
    );

    let eligible = age >= ELIGIBLE_AGE;
    let pct = availability_pct(age);

    // Ineligible borrowers get zeroed monetary outputs regardless of the curve.
    let (gross_principal_limit, net_principal_limit) = if eligible {
        let gross = home_value * pct;
        (gross, clamp_non_negative(gross - balance))
    } else {
        warnings.push(format!(
            "borrower_age {age} is below the minimum qualifying age of {ELIGIBLE_AGE}"
        ));
        (Decimal::ZERO, Decimal::ZERO)
    };

    let output = ReverseMortgageOutput {
        eligible,
        availability_pct: pct,
        gross_principal_limit,
        net_principal_limit,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Reverse Mortgage Principal Limit (age-banded availability)",
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

    const PCT_TOL: Decimal = dec!(0.0001);

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

    // -----------------------------------------------------------------------
    // 1. Band endpoints
    // -----------------------------------------------------------------------
    #[test]
    fn test_band_endpoints() {
        assert_eq!(availability_pct(dec!(61)), Decimal::ZERO);
        assert_close(availability_pct(dec!(62)), dec!(0.35), PCT_TOL, "age 62");
        assert_close(availability_pct(dec!(69)), dec!(0.40), PCT_TOL, "age 69");
        assert_close(availability_pct(dec!(80)), dec!(0.55), PCT_TOL, "age 80");
    }

    // -----------------------------------------------------------------------
    // 2. The 69/70 discontinuity is preserved, not smoothed
    // -----------------------------------------------------------------------
    #[test]
    fn test_band_discontinuity_at_70() {
        assert_close(availability_pct(dec!(69)), dec!(0.40), PCT_TOL, "age 69");
        assert_close(availability_pct(dec!(70)), dec!(0.45), PCT_TOL, "age 70");
    }

    // -----------------------------------------------------------------------
    // 3. The curve caps at age 95
    // -----------------------------------------------------------------------
    #[test]
    fn test_age_cap_at_95() {
        assert_close(availability_pct(dec!(95)), dec!(0.60), PCT_TOL, "age 95");
        assert_close(
            availability_pct(dec!(150)),
            dec!(0.60),
            PCT_TOL,
            "age past the cap",
        );
    }

    // -----------------------------------------------------------------------
    // 4. Mid-band interpolation
    // -----------------------------------------------------------------------
    #[test]
    fn test_mid_band_interpolation() {
        // Age 65.5 = halfway through the 62-69 band: 0.35 + 0.025.
        assert_close(
            availability_pct(dec!(65.5)),
            dec!(0.375),
            PCT_TOL,
            "midpoint of the first band",
        );
    }

    // -----------------------------------------------------------------------
    // 5. Eligible borrower: gross and net limits
    // -----------------------------------------------------------------------
    #[test]
    fn test_eligible_limits() {
        let input = ReverseMortgageInput {
            borrower_age: dec!(70),
            home_value: dec!(500000),
            current_mortgage_balance: dec!(100000),
        };
        let out = analyze_reverse_mortgage(&input).result;
        assert!(out.eligible);
        assert_close(
            out.gross_principal_limit,
            dec!(225000),
            dec!(0.01),
            "500k * 0.45",
        );
        assert_close(out.net_principal_limit, dec!(125000), dec!(0.01), "net");
    }

    // -----------------------------------------------------------------------
    // 6. Balance above the gross limit floors the net at zero
    // -----------------------------------------------------------------------
    #[test]
    fn test_net_floored_at_zero() {
        let input = ReverseMortgageInput {
            borrower_age: dec!(62),
            home_value: dec!(200000),
            current_mortgage_balance: dec!(150000),
        };
        let out = analyze_reverse_mortgage(&input).result;
        // Gross = 70000, balance exceeds it.
        assert_eq!(out.net_principal_limit, Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 7. Ineligible borrower: monetary outputs zeroed
    // -----------------------------------------------------------------------
    #[test]
    fn test_ineligible_zeroed() {
        let input = ReverseMortgageInput {
            borrower_age: dec!(58),
            home_value: dec!(500000),
            current_mortgage_balance: dec!(0),
        };
        let out = analyze_reverse_mortgage(&input);
        assert!(!out.result.eligible);
        assert_eq!(out.result.availability_pct, Decimal::ZERO);
        assert_eq!(out.result.gross_principal_limit, Decimal::ZERO);
        assert_eq!(out.result.net_principal_limit, Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("qualifying age")));
    }
}
