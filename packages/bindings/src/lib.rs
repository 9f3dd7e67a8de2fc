use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Purchase
// ---------------------------------------------------------------------------

#[napi]
pub fn purchase_breakdown(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::purchase::PurchaseInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::purchase::analyze_purchase(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Refinance
// ---------------------------------------------------------------------------

#[napi]
pub fn refinance_break_even(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::refinance::RefinanceInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::refinance::analyze_refinance(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn cash_out_refinance(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::cash_out::CashOutInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::cash_out::analyze_cash_out(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

#[napi]
pub fn rent_vs_buy_projection(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::rent_vs_buy::RentVsBuyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::rent_vs_buy::analyze_rent_vs_buy(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn buydown_schedule(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::buydown::BuydownInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::buydown::analyze_buydown(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reverse mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn reverse_mortgage_estimate(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::reverse::ReverseMortgageInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::reverse::analyze_reverse_mortgage(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}
