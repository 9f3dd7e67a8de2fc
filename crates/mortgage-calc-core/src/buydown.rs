//! Rate buydown schedules: a flat schedule at the note rate, or a temporary
//! 2-1 buydown with discounted rates in the first two years.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{clamp_input, clamp_non_negative, monthly_payment};
use crate::error::MortgageCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::MortgageCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which buydown structure to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuydownMode {
    /// No buydown: one period at the note rate for the full term.
    #[serde(rename = "none")]
    None,
    /// 2-1 temporary buydown: note rate minus 2% in year 1, minus 1% in
    /// year 2, note rate thereafter. Discounted rates floor at 0%.
    #[serde(rename = "temporary-2-1")]
    Temporary21,
}

impl std::str::FromStr for BuydownMode {
    type Err = MortgageCalcError;

    fn from_str(s: &str) -> MortgageCalcResult<Self> {
        match s {
            "none" => Ok(BuydownMode::None),
            "temporary-2-1" => Ok(BuydownMode::Temporary21),
            other => Err(MortgageCalcError::InvalidInput {
                field: "mode".into(),
                reason: format!("unknown buydown mode '{other}' (expected \"none\" or \"temporary-2-1\")"),
            }),
        }
    }
}

/// Input parameters for a buydown schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuydownInput {
    /// Loan amount being financed.
    pub loan_amount: Money,
    /// Note rate as a percentage.
    pub base_rate_pct: Percent,
    /// Loan term in years.
    pub term_years: Years,
    /// Buydown structure.
    pub mode: BuydownMode,
}

/// One period of the buydown schedule.
///
/// The savings fields exist only on discounted periods. A period at the note
/// rate carries no savings fields at all — absent, not zero — so callers can
/// tell "no discount period" apart from "zero savings".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuydownScheduleRow {
    /// Human-readable period ("Year 1", "Years 3+", "Full term").
    pub period_label: String,
    /// Effective rate for the period, as a percentage.
    pub rate_pct: Percent,
    /// Monthly P&I at the period rate.
    pub monthly_payment: Money,
    /// Annualized payment (12 x monthly).
    pub annual_payment: Money,
    /// Monthly savings vs the note-rate payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_monthly: Option<Money>,
    /// Annualized savings vs the note-rate payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_annual: Option<Money>,
}

/// Buydown schedule results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuydownOutput {
    /// Per-period schedule, in period order.
    pub schedule: Vec<BuydownScheduleRow>,
    /// Monthly P&I at the undiscounted note rate.
    pub base_monthly_payment: Money,
    /// Sum of the discount-period annual savings: the upfront subsidy cost.
    pub total_buydown_cost: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the payment schedule for the selected buydown structure.
pub fn analyze_buydown(input: &BuydownInput) -> ComputationOutput<BuydownOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let loan_amount = clamp_input(input.loan_amount, "loan_amount", &mut warnings);
    let base_rate_pct = clamp_input(input.base_rate_pct, "base_rate_pct", &mut warnings);
    let term_years = clamp_input(input.term_years, "term_years", &mut warnings);

    let base_monthly_payment = monthly_payment(loan_amount, base_rate_pct, term_years);

    let (schedule, total_buydown_cost) = match input.mode {
        BuydownMode::None => {
            let row = flat_row("Full term", base_rate_pct, base_monthly_payment);
            (vec![row], Decimal::ZERO)
        }
        BuydownMode::Temporary21 => {
            let year1 = discounted_row(
                "Year 1",
                base_rate_pct,
                dec!(2),
                loan_amount,
                term_years,
                base_monthly_payment,
            );
            let year2 = discounted_row(
                "Year 2",
                base_rate_pct,
                dec!(1),
                loan_amount,
                term_years,
                base_monthly_payment,
            );
            let remainder = flat_row("Years 3+", base_rate_pct, base_monthly_payment);

            let total_cost = year1.savings_annual.unwrap_or_default()
                + year2.savings_annual.unwrap_or_default();
            (vec![year1, year2, remainder], total_cost)
        }
    };

    let output = BuydownOutput {
        schedule,
        base_monthly_payment,
        total_buydown_cost,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Rate Buydown Schedule (none / temporary 2-1)",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Row construction
// ---------------------------------------------------------------------------

fn flat_row(label: &str, rate_pct: Percent, payment: Money) -> BuydownScheduleRow {
    BuydownScheduleRow {
        period_label: label.to_string(),
        rate_pct,
        monthly_payment: payment,
        annual_payment: payment * MONTHS_PER_YEAR,
        savings_monthly: None,
        savings_annual: None,
    }
}

fn discounted_row(
    label: &str,
    base_rate_pct: Percent,
    discount: Decimal,
    loan_amount: Money,
    term_years: Years,
    base_payment: Money,
) -> BuydownScheduleRow {
    let rate_pct = clamp_non_negative(base_rate_pct - discount);
    let payment = monthly_payment(loan_amount, rate_pct, term_years);
    let savings = base_payment - payment;

    BuydownScheduleRow {
        period_label: label.to_string(),
        rate_pct,
        monthly_payment: payment,
        annual_payment: payment * MONTHS_PER_YEAR,
        savings_monthly: Some(savings),
        savings_annual: Some(savings * MONTHS_PER_YEAR),
    }
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

    fn standard_input(mode: BuydownMode) -> BuydownInput {
        BuydownInput {
            loan_amount: dec!(300000),
            base_rate_pct: dec!(7),
            term_years: dec!(30),
            mode,
        }
    }

    // -----------------------------------------------------------------------
    // 1. 2-1 schedule: three rows at base-2 / base-1 / base
    // -----------------------------------------------------------------------
    #[test]
    fn test_temporary_21_rates() {
        let out = analyze_buydown(&standard_input(BuydownMode::Temporary21)).result;
        assert_eq!(out.schedule.len(), 3);
        assert_eq!(out.schedule[0].rate_pct, dec!(5));
        assert_eq!(out.schedule[1].rate_pct, dec!(6));
        assert_eq!(out.schedule[2].rate_pct, dec!(7));
        assert_eq!(out.schedule[0].period_label, "Year 1");
        assert_eq!(out.schedule[2].period_label, "Years 3+");
    }

    // -----------------------------------------------------------------------
    // 2. Savings exist on years 1-2 and are genuinely absent on years 3+
    // -----------------------------------------------------------------------
    #[test]
    fn test_savings_presence() {
        let out = analyze_buydown(&standard_input(BuydownMode::Temporary21)).result;
        assert!(out.schedule[0].savings_monthly.is_some());
        assert!(out.schedule[1].savings_monthly.is_some());
        assert_eq!(out.schedule[2].savings_monthly, None);
        assert_eq!(out.schedule[2].savings_annual, None);

        // Absent fields are skipped in JSON, not serialized as 0.
        let json = serde_json::to_value(&out.schedule[2]).unwrap();
        assert!(json.get("savings_monthly").is_none());

        let year1_savings = out.schedule[0].savings_monthly.unwrap();
        assert_close(
            year1_savings,
            out.base_monthly_payment - out.schedule[0].monthly_payment,
            TOL,
            "savings vs the note-rate payment",
        );
        assert!(year1_savings > out.schedule[1].savings_monthly.unwrap());
    }

    // -----------------------------------------------------------------------
    // 3. None mode: one full-term row, no savings fields
    // -----------------------------------------------------------------------
    #[test]
    fn test_none_mode_single_row() {
        let out = analyze_buydown(&standard_input(BuydownMode::None)).result;
        assert_eq!(out.schedule.len(), 1);
        let row = &out.schedule[0];
        assert_eq!(row.period_label, "Full term");
        assert_eq!(row.rate_pct, dec!(7));
        assert_close(
            row.monthly_payment,
            out.base_monthly_payment,
            TOL,
            "note-rate payment",
        );
        assert_eq!(row.savings_monthly, None);
        assert_eq!(out.total_buydown_cost, Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 4. Discounted rates floor at 0%, never negative
    // -----------------------------------------------------------------------
    #[test]
    fn test_rate_floor_at_zero() {
        let input = BuydownInput {
            base_rate_pct: dec!(1.5),
            ..standard_input(BuydownMode::Temporary21)
        };
        let out = analyze_buydown(&input).result;
        assert_eq!(out.schedule[0].rate_pct, Decimal::ZERO);
        assert_eq!(out.schedule[1].rate_pct, dec!(0.5));
    }

    // -----------------------------------------------------------------------
    // 5. Total buydown cost sums the discount-year annual savings
    // -----------------------------------------------------------------------
    #[test]
    fn test_total_buydown_cost() {
        let out = analyze_buydown(&standard_input(BuydownMode::Temporary21)).result;
        let expected = out.schedule[0].savings_annual.unwrap()
            + out.schedule[1].savings_annual.unwrap();
        assert_close(out.total_buydown_cost, expected, TOL, "upfront subsidy");
        assert!(out.total_buydown_cost > Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 6. Mode serde names match the wire format
    // -----------------------------------------------------------------------
    #[test]
    fn test_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(BuydownMode::Temporary21).unwrap(),
            serde_json::json!("temporary-2-1")
        );
        assert_eq!(
            serde_json::from_value::<BuydownMode>(serde_json::json!("none")).unwrap(),
            BuydownMode::None
        );
    }

    // -----------------------------------------------------------------------
    // 7. FromStr accepts the wire names and rejects anything else
    // -----------------------------------------------------------------------
    #[test]
    fn test_mode_from_str() {
        assert_eq!("none".parse::<BuydownMode>().unwrap(), BuydownMode::None);
        assert_eq!(
            "temporary-2-1".parse::<BuydownMode>().unwrap(),
            BuydownMode::Temporary21
        );
        let err = "3-2-1".parse::<BuydownMode>().unwrap_err();
        assert!(err.to_string().contains("unknown buydown mode"));
    }

    // -----------------------------------------------------------------------
    // 8. A negative term clamps to zero periods with a warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_term_warns_and_clamps() {
        let input = BuydownInput {
            term_years: dec!(-30),
            ..standard_input(BuydownMode::Temporary21)
        };
        let out = analyze_buydown(&input);
        assert!(out.warnings.iter().any(|w| w.contains("term_years")));
        assert_eq!(out.result.base_monthly_payment, Decimal::ZERO);
        for row in &out.result.schedule {
            assert_eq!(row.monthly_payment, Decimal::ZERO);
        }
    }
}
